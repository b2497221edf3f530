//! Text normalization shared by all format extractors
//!
//! Raw extracted text arrives with mixed line endings, smart quotes, control
//! characters, and uneven whitespace. Each input format gets a strategy that
//! runs the shared base pipeline (NFC, line-break standardization,
//! control-character stripping, whitespace and blank-line collapsing, trim)
//! plus its own repairs. Every strategy is idempotent: normalizing
//! already-normalized text is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r").expect("Invalid regex"));
static ANY_LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("Invalid regex"));
static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("Invalid regex"));
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("Invalid regex"));
static SPLIT_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z]) ([a-z])").expect("Invalid regex"));
static WS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Normalization strategy for one input format.
pub trait Normalizer: Send + Sync {
    /// Clean one raw string. Empty input yields an empty string.
    fn normalize(&self, raw: &str) -> String;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

/// Base pipeline for plain text files
pub struct PlainTextNormalizer;

impl Normalizer for PlainTextNormalizer {
    fn normalize(&self, raw: &str) -> String {
        clean_base(raw)
    }

    fn name(&self) -> &'static str {
        "plain-text"
    }
}

/// Word-processor text: base pipeline plus smart-quote replacement
pub struct WordNormalizer;

impl Normalizer for WordNormalizer {
    fn normalize(&self, raw: &str) -> String {
        clean_base(&straighten_quotes(raw))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Text extracted from HTML or rendered Markdown.
///
/// The structural work (block-element newline injection, noise removal)
/// happens in the extractor before text extraction; the cleanup afterwards
/// is the base pipeline.
pub struct MarkupNormalizer;

impl Normalizer for MarkupNormalizer {
    fn normalize(&self, raw: &str) -> String {
        clean_base(raw)
    }

    fn name(&self) -> &'static str {
        "markup"
    }
}

/// OCR output: base pipeline plus scan-artifact repairs.
///
/// Table scans leave stray pipe characters, and tight kerning makes the
/// engine insert spaces inside words ("fi le"). Pipes become spaces, then a
/// single space between two lowercase letters is removed to a fixed point.
/// The repair cannot tell a kerning split from a real word boundary, so
/// runs of single-spaced lowercase words merge; newlines and words starting
/// with an uppercase letter or a digit survive.
pub struct OcrNormalizer;

impl Normalizer for OcrNormalizer {
    fn normalize(&self, raw: &str) -> String {
        let text: String = raw.nfc().collect();
        let text = LINE_BREAKS.replace_all(&text, "\n");
        let text = strip_control_chars(&text);
        let text = text.replace('|', " ");
        let text = HORIZONTAL_WS.replace_all(&text, " ");
        let text = rejoin_split_words(&text);
        let text = BLANK_LINES.replace_all(&text, "\n\n");
        text.trim().to_string()
    }

    fn name(&self) -> &'static str {
        "ocr"
    }
}

/// One page of PDF text: flattened to a single line.
///
/// Every line break inside a page becomes a space. Page markers and page
/// joining belong to the PDF extractor.
pub struct PdfPageNormalizer;

impl Normalizer for PdfPageNormalizer {
    fn normalize(&self, raw: &str) -> String {
        let text: String = raw.nfc().collect();
        let text = ANY_LINE_BREAK.replace_all(&text, " ");
        let text = strip_control_chars(&text);
        let text = WS_RUN.replace_all(&text, " ");
        text.trim().to_string()
    }

    fn name(&self) -> &'static str {
        "pdf-page"
    }
}

/// Shared base pipeline: NFC, LF line endings, control characters out
/// (newlines and tabs survive until the whitespace passes), horizontal
/// whitespace collapsed, blank-line runs capped at one, edges trimmed.
fn clean_base(raw: &str) -> String {
    let text: String = raw.nfc().collect();
    let text = LINE_BREAKS.replace_all(&text, "\n");
    let text = strip_control_chars(&text);
    let text = HORIZONTAL_WS.replace_all(&text, " ");
    let text = BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Replace curly/smart quotes with straight ASCII quotes
fn straighten_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

/// Strip control characters, keeping newlines and tabs
fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Remove a single space between two lowercase letters, repeatedly, until
/// the text stops changing. Joining can expose a new pair ("a b c" joins
/// to "ab c" first), so one pass is not enough.
fn rejoin_split_words(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = SPLIT_WORD.replace_all(&current, "$1$2").into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_strategies() -> Vec<Box<dyn Normalizer>> {
        vec![
            Box::new(PlainTextNormalizer),
            Box::new(WordNormalizer),
            Box::new(MarkupNormalizer),
            Box::new(OcrNormalizer),
            Box::new(PdfPageNormalizer),
        ]
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        for strategy in all_strategies() {
            assert_eq!(strategy.normalize(""), "", "{}", strategy.name());
        }
    }

    #[test]
    fn test_idempotent_for_every_strategy() {
        let samples = [
            "Hello   world",
            "a\tb\tc",
            "one\r\ntwo\rthree",
            "para\n\n\n\nbreak",
            "blank \n \t \n lines",
            "\u{201C}quoted\u{201D} and \u{2018}single\u{2019}",
            "fi le with | pipes | everywhere",
            "  padded  \n\n  text  ",
            "ctrl\u{0000}chars\u{0007}here",
            "a \u{0000} b",
        ];
        for strategy in all_strategies() {
            for sample in samples {
                let once = strategy.normalize(sample);
                let twice = strategy.normalize(&once);
                assert_eq!(once, twice, "{} not idempotent on {:?}", strategy.name(), sample);
            }
        }
    }

    #[test]
    fn test_never_leaves_three_newlines() {
        let samples = ["a\n\n\nb", "a\n\n\n\n\nb", "a\n \n\t\nb", "\n\n\n\n"];
        for strategy in all_strategies() {
            for sample in samples {
                let cleaned = strategy.normalize(sample);
                assert!(
                    !cleaned.contains("\n\n\n"),
                    "{} left 3+ newlines in {:?}",
                    strategy.name(),
                    cleaned
                );
            }
        }
    }

    #[test]
    fn test_blank_line_runs_collapse_to_one_break() {
        assert_eq!(PlainTextNormalizer.normalize("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(PlainTextNormalizer.normalize("a\n \nb"), "a\n\nb");
    }

    #[test]
    fn test_horizontal_whitespace_collapses() {
        assert_eq!(PlainTextNormalizer.normalize("a  \t  b"), "a b");
    }

    #[test]
    fn test_line_breaks_standardized() {
        assert_eq!(PlainTextNormalizer.normalize("one\r\ntwo\rthree"), "one\ntwo\nthree");
    }

    #[test]
    fn test_control_characters_stripped() {
        assert_eq!(PlainTextNormalizer.normalize("a\u{0000}b\u{0007}c"), "abc");
        // Tabs survive stripping and collapse to a space
        assert_eq!(PlainTextNormalizer.normalize("a\tb"), "a b");
    }

    #[test]
    fn test_word_strategy_straightens_smart_quotes() {
        let cleaned = WordNormalizer.normalize("\u{2018}a\u{2019} \u{201C}b\u{201D}");
        assert_eq!(cleaned, "'a' \"b\"");
    }

    #[test]
    fn test_plain_strategy_keeps_smart_quotes() {
        let cleaned = PlainTextNormalizer.normalize("\u{201C}b\u{201D}");
        assert_eq!(cleaned, "\u{201C}b\u{201D}");
    }

    #[test]
    fn test_ocr_rejoins_split_words() {
        assert_eq!(OcrNormalizer.normalize("fi le"), "file");
        assert_eq!(OcrNormalizer.normalize("fi  le"), "file");
    }

    #[test]
    fn test_ocr_rejoin_merges_single_spaced_lowercase_words() {
        // The repair cannot tell "fi le" from two real words
        assert_eq!(OcrNormalizer.normalize("data base"), "database");
        assert_eq!(OcrNormalizer.normalize("Data Base"), "Data Base");
    }

    #[test]
    fn test_ocr_rejoin_leaves_line_breaks_alone() {
        assert_eq!(OcrNormalizer.normalize("first\nsecond"), "first\nsecond");
    }

    #[test]
    fn test_ocr_strips_pipe_artifacts() {
        assert_eq!(OcrNormalizer.normalize("| A | B |"), "A B");
    }

    #[test]
    fn test_pdf_page_flattens_to_single_line() {
        let cleaned = PdfPageNormalizer.normalize("line one\nline  two\r\nline three");
        assert!(!cleaned.contains('\n'));
        assert_eq!(cleaned, "line one line two line three");
    }

    #[test]
    fn test_nfc_composes_combining_marks() {
        // "e" + combining acute composes to a single scalar
        let cleaned = PlainTextNormalizer.normalize("cafe\u{0301}");
        assert_eq!(cleaned, "caf\u{00E9}");
    }
}
