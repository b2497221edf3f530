//! Word document extraction tool
//!
//! Run with: cargo run --bin parse-docx -- [input] [output]

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use micro_rag::cli;
use micro_rag::error::Result;
use micro_rag::extract::extract_docx;

/// Extract the paragraph text of a .docx file
#[derive(Parser)]
#[command(name = "parse-docx", version)]
struct Args {
    /// Input .docx file (default: inputs/sample.docx)
    input: Option<PathBuf>,
    /// Output file for the cleaned text (default: outputs/docx_output.txt)
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
        "inputs/sample.docx",
        "outputs/docx_output.txt",
    );

    println!("Parsing Word document: {}", input.display());
    let started = Instant::now();

    let data = cli::read_input_bytes(&input).await?;
    let extraction = extract_docx(&input.display().to_string(), &data)?;

    cli::write_output(&output, &extraction.text).await?;
    cli::report(
        extraction.raw_chars,
        extraction.cleaned_chars(),
        &output,
        started.elapsed(),
    );

    Ok(())
}
