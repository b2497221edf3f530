//! Format-specific text extraction
//!
//! Each module turns one input format into cleaned plain text by pairing a
//! format stage (pull the raw text out of the file) with the matching
//! cleaning strategy from [`crate::normalize`].

pub mod docx;
pub mod html;
pub mod markdown;
pub mod ocr;
pub mod pdf;
pub mod text;

pub use docx::extract_docx;
pub use html::extract_html;
pub use markdown::extract_markdown;
pub use ocr::extract_image;
pub use pdf::{extract_pdf, PdfExtraction};
pub use text::extract_plain_text;

/// Outcome of one extraction
#[derive(Debug)]
pub struct Extraction {
    /// Characters the format stage produced, before cleaning
    pub raw_chars: usize,
    /// Cleaned text
    pub text: String,
}

impl Extraction {
    /// Characters left after cleaning
    pub fn cleaned_chars(&self) -> usize {
        self.text.chars().count()
    }
}
