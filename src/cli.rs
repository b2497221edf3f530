//! Shared plumbing for the extraction tools
//!
//! Every tool takes optional positional input and output paths, falls back
//! to per-format defaults, refuses to run on a missing input, and prints a
//! short report after writing the cleaned text.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

/// Initialize tracing for a command-line tool. Quiet unless RUST_LOG
/// says otherwise.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "micro_rag=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Pick explicit paths over the per-tool defaults
pub fn resolve_paths(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    default_input: &str,
    default_output: &str,
) -> (PathBuf, PathBuf) {
    (
        input.unwrap_or_else(|| PathBuf::from(default_input)),
        output.unwrap_or_else(|| PathBuf::from(default_output)),
    )
}

/// Fail with the offending path when the input does not exist
pub async fn ensure_input_exists(path: &Path) -> Result<()> {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        Ok(())
    } else {
        Err(Error::InputNotFound(path.display().to_string()))
    }
}

/// Read an input file as text, replacing invalid UTF-8
pub async fn read_input_text(path: &Path) -> Result<String> {
    ensure_input_exists(path).await?;
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read an input file as bytes
pub async fn read_input_bytes(path: &Path) -> Result<Vec<u8>> {
    ensure_input_exists(path).await?;
    Ok(tokio::fs::read(path).await?)
}

/// Write cleaned text, creating the output directory when missing
pub async fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, text).await?;
    Ok(())
}

/// Standard completion report for a tool run
pub fn report(raw_chars: usize, cleaned_chars: usize, output: &Path, elapsed: Duration) {
    println!("Cleaned {} chars -> {} chars", raw_chars, cleaned_chars);
    println!("Saved to {} ({} ms)", output.display(), elapsed.as_millis());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_paths_win_over_defaults() {
        let (input, output) = resolve_paths(
            Some(PathBuf::from("my.txt")),
            None,
            "inputs/text.txt",
            "outputs/txt_output.txt",
        );
        assert_eq!(input, PathBuf::from("my.txt"));
        assert_eq!(output, PathBuf::from("outputs/txt_output.txt"));
    }

    #[tokio::test]
    async fn test_missing_input_error_names_the_path() {
        let err = ensure_input_exists(Path::new("definitely/not/here.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[tokio::test]
    async fn test_write_output_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/out.txt");
        write_output(&target, "hello").await.unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "hello");
    }
}
