//! Plain text extraction

use crate::extract::Extraction;
use crate::normalize::{Normalizer, PlainTextNormalizer};

/// Clean raw plain text for ingestion
pub fn extract_plain_text(raw: &str) -> Extraction {
    let raw_chars = raw.chars().count();
    let text = PlainTextNormalizer.normalize(raw);
    Extraction { raw_chars, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_cover_both_stages() {
        let extraction = extract_plain_text("a\r\nb");
        assert_eq!(extraction.raw_chars, 4);
        assert_eq!(extraction.text, "a\nb");
        assert_eq!(extraction.cleaned_chars(), 3);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(extract_plain_text("").text, "");
    }
}
