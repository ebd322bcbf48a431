// ABOUTME: Integration tests running real passage fixtures through the public transformer API.
// ABOUTME: Covers poetic line tagging, prose wrapping, copyright handling and response processing.

use pretty_assertions::assert_eq;
use soap_verses::{
    process_passage_html, NbspStyle, PassageResponse, ProcessReport, Transformer,
};
use std::fs;

/// Load a fixture file from the fixtures directory.
fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read fixture {path}: {e}"))
}

#[test]
fn test_psalm_lines_are_tagged_not_wrapped() {
    let out = process_passage_html(&load_fixture("psalm150.html")).unwrap();

    assert!(out.contains(r#"<span id="p19150001_06-1" class="line verse" data-ref="19150001"><b class="chapter-num">150:1</b>Praise the LORD!</span>"#));
    assert!(out.contains(r#"class="indent line verse" data-ref="19150001""#));
    assert_eq!(out.matches(r#"data-ref="19150001""#).count(), 3);
    assert_eq!(out.matches(r#"data-ref="19150002""#).count(), 2);
    assert_eq!(out.matches(r#"data-ref="19150003""#).count(), 2);

    // No synthetic wrappers anywhere in poetry.
    assert!(!out.contains(r#"<span class="verse""#));
}

#[test]
fn test_psalm_number_padding_is_trimmed() {
    let out = process_passage_html(&load_fixture("psalm150.html")).unwrap();

    assert!(!out.contains("150:1\u{a0}"));
    assert!(!out.contains("2\u{a0}</b>"));
    assert!(!out.contains("\u{a0}Praise"));
    assert!(out.contains(r#"<b class="verse-num inline">2</b>Praise him for his mighty deeds;"#));
}

#[test]
fn test_psalm_line_groups_replace_paragraph() {
    let out = process_passage_html(&load_fixture("psalm150.html")).unwrap();

    assert_eq!(out.matches(r#"<section class="line-group">"#).count(), 2);
    assert!(!out.contains("begin-line-group"));
    assert!(!out.contains("end-line-group"));
    assert!(!out.contains(r#"<p class="block-indent">"#));
}

#[test]
fn test_psalm_headings_and_copyright() {
    let out = process_passage_html(&load_fixture("psalm150.html")).unwrap();

    assert!(out.contains(r#"<h3>Let Everything Praise the <span class="divine-name">Lord</span></h3>"#));
    assert!(out.contains(r#"<p>(<a href="http://www.esv.org" class="copyright">ESV</a>)</p>"#));
    // Only the passage container keeps a verse-style id.
    assert_eq!(out.matches(r#"id="v"#).count(), 1);
}

#[test]
fn test_malachi_prose_gets_one_wrapper_per_verse() {
    let out = process_passage_html(&load_fixture("malachi3.html")).unwrap();

    assert_eq!(out.matches(r#"<span class="verse" data-ref="#).count(), 4);
    for reference in ["39003001", "39003002", "39003003", "39003004"] {
        assert!(out.contains(&format!(r#"data-ref="{reference}""#)), "missing {reference}");
    }
    assert!(out.contains(concat!(
        r#"<span class="verse" data-ref="39003002"><b class="verse-num">2</b>"#,
        "But who can endure the day of his coming"
    )));
    assert!(out.contains("says the LORD of hosts.</span>"));
    assert!(out.contains(r#"<p class="starts-chapter"><span class="verse" data-ref="39003001">"#));
}

#[test]
fn test_malachi_copyright_is_not_wrapped() {
    let out = process_passage_html(&load_fixture("malachi3.html")).unwrap();

    assert!(out.contains(r#"<p>(<a href="http://www.esv.org" class="copyright">ESV</a>)</p>"#));
    assert!(!out.contains(r#"data-ref="39003004">(<a"#));
}

#[test]
fn test_nbsp_entity_style_applies_to_output() {
    let t = Transformer::builder().nbsp(NbspStyle::Entity).build();
    let out = t
        .transform(r#"<p><b id="v01001001">1</b> a&nbsp;b</p>"#)
        .unwrap();
    assert_eq!(
        out,
        r#"<p><span class="verse" data-ref="01001001"><b>1</b>a&nbsp;b</span></p>"#
    );
}

#[test]
fn test_process_response_fixture() {
    let mut resp: PassageResponse =
        serde_json::from_str(&load_fixture("passages.json")).unwrap();
    let report = Transformer::default().process_response(&mut resp);

    assert_eq!(report, ProcessReport { processed: 2, failed: 0 });
    assert_eq!(resp.passage_meta.len(), 2);
    assert_eq!(resp.passage_meta[0].next_chapter, None);
    assert!(resp.passages[0].contains(r#"class="line verse""#));
    assert!(resp.passages[1].contains(r#"data-ref="39003002""#));
    assert_eq!(resp.copyright, "ESV");
}

#[test]
fn test_default_transformer_matches_convenience_entry_point() {
    let html = load_fixture("malachi3.html");
    assert_eq!(
        Transformer::default().transform(&html).unwrap(),
        process_passage_html(&html).unwrap()
    );
}
