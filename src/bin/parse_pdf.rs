//! PDF extraction tool
//!
//! Run with: cargo run --bin parse-pdf -- [input] [output]

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use micro_rag::cli;
use micro_rag::error::Result;
use micro_rag::extract::extract_pdf;

/// Extract and clean the text of a PDF, page by page
#[derive(Parser)]
#[command(name = "parse-pdf", version)]
struct Args {
    /// Input PDF file (default: inputs/sample.pdf)
    input: Option<PathBuf>,
    /// Output file for the cleaned text (default: outputs/output.txt)
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
        "inputs/sample.pdf",
        "outputs/output.txt",
    );

    println!("Parsing PDF file: {}", input.display());
    let started = Instant::now();

    let data = cli::read_input_bytes(&input).await?;
    let extraction = extract_pdf(&input.display().to_string(), data).await?;

    println!("Total pages: {}", extraction.pages.len());
    if let Some(first) = extraction.pages.first() {
        let preview: String = first.chars().take(150).collect();
        println!("Page 1 preview: {}", preview);
    }

    cli::write_output(&output, &extraction.text).await?;
    cli::report(
        extraction.raw_chars,
        extraction.text.chars().count(),
        &output,
        started.elapsed(),
    );

    Ok(())
}
