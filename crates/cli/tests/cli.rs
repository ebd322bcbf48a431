// ABOUTME: Integration tests for the soap-cli binary.
// ABOUTME: Tests raw HTML from files and stdin, JSON response mode, output files and failure exits.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PASSAGE: &str = r#"<p><b class="verse-num" id="v43003016-1">16&nbsp;</b>For God so loved the world.</p>"#;
const WRAPPED: &str = r#"<span class="verse" data-ref="43003016"><b class="verse-num">16</b>For God so loved the world.</span>"#;

fn soap_cmd() -> Command {
    Command::cargo_bin("soap-cli").unwrap()
}

#[test]
fn transform_html_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("john3.html");
    fs::write(&html_path, PASSAGE).unwrap();

    soap_cmd()
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(WRAPPED));
}

#[test]
fn transform_html_from_stdin() {
    soap_cmd()
        .arg("-")
        .write_stdin(PASSAGE)
        .assert()
        .success()
        .stdout(predicate::str::contains(WRAPPED));
}

#[test]
fn multiple_targets_are_separated_by_blank_line() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("a.html");
    let second = temp_dir.path().join("b.html");
    fs::write(&first, "<p>one</p>").unwrap();
    fs::write(&second, "<p>two</p>").unwrap();

    soap_cmd()
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout("<p>one</p>\n\n<p>two</p>\n");
}

#[test]
fn nbsp_entity_flag() {
    soap_cmd()
        .arg("--nbsp-entity")
        .arg("-")
        .write_stdin("<p>a&nbsp;b</p>")
        .assert()
        .success()
        .stdout("<p>a&nbsp;b</p>\n");
}

#[test]
fn json_mode_processes_passages() {
    let temp_dir = TempDir::new().unwrap();
    let json_path = temp_dir.path().join("resp.json");
    let body = serde_json::json!({
        "query": "John 3:16",
        "passages": [PASSAGE],
        "copyright": "ESV"
    });
    fs::write(&json_path, body.to_string()).unwrap();

    let output = soap_cmd()
        .arg("--json")
        .arg("--compact")
        .arg(&json_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let resp: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(resp["query"], "John 3:16");
    assert_eq!(resp["passages"][0], format!("<p>{WRAPPED}</p>"));
}

#[test]
fn output_flag_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("out.html");

    soap_cmd()
        .arg("-o")
        .arg(&out_path)
        .arg("-")
        .write_stdin(PASSAGE)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, format!("<p>{WRAPPED}</p>"));
}

#[test]
fn strict_mode_fails_on_broken_markup() {
    soap_cmd()
        .arg("--strict")
        .arg("-")
        .write_stdin("<p>a</b></p>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse HTML fragment"));
}

#[test]
fn missing_file_fails() {
    soap_cmd()
        .arg("/nonexistent/passage.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn invalid_json_fails() {
    soap_cmd()
        .arg("--json")
        .arg("-")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a passage response"));
}
