//! Plain text extraction tool
//!
//! Run with: cargo run --bin parse-txt -- [input] [output]

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use micro_rag::cli;
use micro_rag::error::Result;
use micro_rag::extract::extract_plain_text;

/// Clean a plain text file for ingestion
#[derive(Parser)]
#[command(name = "parse-txt", version)]
struct Args {
    /// Input text file (default: inputs/text.txt)
    input: Option<PathBuf>,
    /// Output file for the cleaned text (default: outputs/txt_output.txt)
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
        "inputs/text.txt",
        "outputs/txt_output.txt",
    );

    println!("Parsing text file: {}", input.display());
    let started = Instant::now();

    let raw = cli::read_input_text(&input).await?;
    let extraction = extract_plain_text(&raw);

    cli::write_output(&output, &extraction.text).await?;
    cli::report(
        extraction.raw_chars,
        extraction.cleaned_chars(),
        &output,
        started.elapsed(),
    );

    Ok(())
}
