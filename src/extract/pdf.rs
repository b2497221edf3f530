//! PDF text extraction
//!
//! Extracts page by page so each page can be cleaned and labeled on its
//! own. Extraction runs on a blocking thread with a hard timeout; some
//! PDFs with unusual font encodings make pdf-extract crawl.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::normalize::{Normalizer, PdfPageNormalizer};

const EXTRACT_TIMEOUT: Duration = Duration::from_secs(60);

/// Outcome of a PDF extraction, page structure included
#[derive(Debug)]
pub struct PdfExtraction {
    /// Characters across all pages before cleaning
    pub raw_chars: usize,
    /// Cleaned text of each page, in order
    pub pages: Vec<String>,
    /// All pages labeled and joined for output
    pub text: String,
}

/// Extract the text of a PDF and clean it page by page.
///
/// The output keeps page boundaries visible: every page becomes a
/// `[PAGE n]` section and sections are joined by blank lines.
pub async fn extract_pdf(filename: &str, data: Vec<u8>) -> Result<PdfExtraction> {
    let handle =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem_by_pages(&data));

    // On timeout the blocking task cannot be cancelled; it is left to
    // finish in the background.
    let raw_pages = tokio::time::timeout(EXTRACT_TIMEOUT, handle)
        .await
        .map_err(|_| Error::file_parse(filename, "PDF extraction timed out after 60s"))?
        .map_err(|e| Error::internal(format!("PDF extraction task failed: {}", e)))?
        .map_err(|e| Error::file_parse(filename, format!("Failed to extract text: {}", e)))?;

    let raw_chars = raw_pages.iter().map(|p| p.chars().count()).sum();
    let normalizer = PdfPageNormalizer;
    let pages: Vec<String> = raw_pages.iter().map(|p| normalizer.normalize(p)).collect();
    let text = label_pages(&pages);

    Ok(PdfExtraction {
        raw_chars,
        pages,
        text,
    })
}

fn label_pages(pages: &[String]) -> String {
    pages
        .iter()
        .enumerate()
        .map(|(index, page)| format!("[PAGE {}] {}", index + 1, page))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_are_labeled_and_separated() {
        let pages = vec!["First page".to_string(), "Second".to_string()];
        assert_eq!(label_pages(&pages), "[PAGE 1] First page\n\n[PAGE 2] Second");
    }

    #[test]
    fn test_no_pages_yields_empty_text() {
        assert_eq!(label_pages(&[]), "");
    }

    #[tokio::test]
    async fn test_garbage_bytes_fail_with_filename() {
        let err = extract_pdf("broken.pdf", b"not a pdf".to_vec())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("broken.pdf"));
    }
}
