//! Word document text extraction

use crate::error::{Error, Result};
use crate::extract::Extraction;
use crate::normalize::{Normalizer, WordNormalizer};

/// Extract the paragraph text of a .docx file and clean it.
///
/// Walks paragraphs only; tables and headers are out of scope for this
/// extractor. `filename` is used for error context.
pub fn extract_docx(filename: &str, data: &[u8]) -> Result<Extraction> {
    let doc = docx_rs::read_docx(data).map_err(|e| Error::file_parse(filename, e.to_string()))?;

    let mut raw = String::new();
    for child in doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(text) = child {
                            raw.push_str(&text.text);
                        }
                    }
                }
            }
            raw.push('\n');
        }
    }

    let raw_chars = raw.chars().count();
    let text = WordNormalizer.normalize(&raw);
    Ok(Extraction { raw_chars, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for paragraph in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*paragraph)));
        }
        let mut buffer = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let data = docx_bytes(&["First paragraph", "Second paragraph"]);
        let extraction = extract_docx("test.docx", &data).unwrap();
        assert_eq!(extraction.text, "First paragraph\nSecond paragraph");
    }

    #[test]
    fn test_smart_quotes_are_straightened() {
        let data = docx_bytes(&["It\u{2019}s \u{201C}quoted\u{201D}"]);
        let extraction = extract_docx("test.docx", &data).unwrap();
        assert_eq!(extraction.text, "It's \"quoted\"");
    }

    #[test]
    fn test_garbage_bytes_fail_with_filename() {
        let err = extract_docx("broken.docx", b"not a zip archive").unwrap_err();
        assert!(err.to_string().contains("broken.docx"));
    }
}
