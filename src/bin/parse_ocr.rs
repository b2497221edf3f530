//! Image OCR extraction tool
//!
//! Needs the tesseract binary on PATH.
//! Run with: cargo run --bin parse-ocr -- [input] [output]

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use micro_rag::cli;
use micro_rag::error::Result;
use micro_rag::extract::extract_image;

/// Recognize and clean the text of an image file
#[derive(Parser)]
#[command(name = "parse-ocr", version)]
struct Args {
    /// Input image file (default: inputs/sample.png)
    input: Option<PathBuf>,
    /// Output file for the cleaned text (default: outputs/ocr_output.txt)
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
        "inputs/sample.png",
        "outputs/ocr_output.txt",
    );

    println!("Running OCR on: {}", input.display());
    let started = Instant::now();

    cli::ensure_input_exists(&input).await?;
    let extraction = extract_image(&input).await?;

    cli::write_output(&output, &extraction.text).await?;
    cli::report(
        extraction.raw_chars,
        extraction.cleaned_chars(),
        &output,
        started.elapsed(),
    );

    Ok(())
}
