// ABOUTME: CLI for restructuring passage HTML with the soap-verses transformer.
// ABOUTME: Reads raw HTML or a passage API JSON response from files/stdin and prints the result.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use soap_verses::{NbspStyle, PassageResponse, Transformer};
use tracing::Level;

/// Wrap every verse in passage HTML so it can be addressed individually.
#[derive(Parser, Debug)]
#[command(name = "soap-cli")]
#[command(about = "Restructure Bible passage HTML into per-verse wrappers", long_about = None)]
struct Args {
    /// Local file paths. Use "-" to read one input from stdin.
    #[arg(required = true)]
    targets: Vec<String>,

    /// Treat each input as a passage API JSON response and process its passages.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Output compact JSON instead of pretty (with --json).
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Fail on any HTML parse error instead of recovering.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Write non-breaking spaces as &nbsp; instead of the literal character.
    #[arg(long, default_value_t = false)]
    nbsp_entity: bool,

    /// Leave literal \uXXXX sequences in the input alone.
    #[arg(long, default_value_t = false)]
    no_unescape: bool,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log transform details to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    if args.targets.iter().filter(|t| t.as_str() == "-").count() > 1 {
        bail!("stdin (\"-\") can only be read once");
    }

    let transformer = Transformer::builder()
        .strict(args.strict)
        .unescape_unicode(!args.no_unescape)
        .nbsp(if args.nbsp_entity {
            NbspStyle::Entity
        } else {
            NbspStyle::Literal
        })
        .build();

    let output = if args.json {
        render_json(&transformer, &args)?
    } else {
        render_html(&transformer, &args.targets)?
    };

    match &args.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn render_html(transformer: &Transformer, targets: &[String]) -> Result<String> {
    let mut outputs = Vec::with_capacity(targets.len());
    for target in targets {
        let html = load_input(target)?;
        let out = transformer
            .transform(&html)
            .with_context(|| format!("failed to transform {target}"))?;
        outputs.push(out);
    }
    Ok(outputs.join("\n\n"))
}

fn render_json(transformer: &Transformer, args: &Args) -> Result<String> {
    let mut responses = Vec::with_capacity(args.targets.len());
    let mut failed = 0;

    for target in &args.targets {
        let raw = load_input(target)?;
        let mut resp: PassageResponse = serde_json::from_str(&raw)
            .with_context(|| format!("{target} is not a passage response"))?;
        let report = transformer.process_response(&mut resp);
        tracing::debug!(input = %target, processed = report.processed, failed = report.failed, "processed response");
        failed += report.failed;
        responses.push(resp);
    }

    if failed > 0 {
        bail!("{failed} passage(s) could not be processed");
    }

    // A single target emits the response itself; several emit an array.
    let value = if responses.len() == 1 {
        serde_json::to_value(&responses[0])?
    } else {
        serde_json::to_value(&responses)?
    };

    Ok(if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    })
}

fn load_input(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    let path = Path::new(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {target}"))
}
