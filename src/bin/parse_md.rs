//! Markdown extraction tool
//!
//! Run with: cargo run --bin parse-md -- [input] [output]

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use micro_rag::cli;
use micro_rag::error::Result;
use micro_rag::extract::extract_markdown;

/// Extract the visible text of a Markdown file
#[derive(Parser)]
#[command(name = "parse-md", version)]
struct Args {
    /// Input Markdown file (default: inputs/sample.md)
    input: Option<PathBuf>,
    /// Output file for the cleaned text (default: outputs/md_output.txt)
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    cli::init_tracing();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let (input, output) = cli::resolve_paths(
        args.input,
        args.output,
        "inputs/sample.md",
        "outputs/md_output.txt",
    );

    println!("Parsing Markdown file: {}", input.display());
    let started = Instant::now();

    let raw = cli::read_input_text(&input).await?;
    let extraction = extract_markdown(&raw);

    cli::write_output(&output, &extraction.text).await?;
    cli::report(
        extraction.raw_chars,
        extraction.cleaned_chars(),
        &output,
        started.elapsed(),
    );

    Ok(())
}
