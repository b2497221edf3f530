//! HTML text extraction
//!
//! Walks the parsed document instead of taking the flat text of the body:
//! boilerplate elements are skipped entirely, `<br>` turns into a newline,
//! and a newline is appended after each block-level element so the cleaned
//! output keeps one line per block.

use once_cell::sync::Lazy;
use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};

use crate::extract::Extraction;
use crate::normalize::{MarkupNormalizer, Normalizer};

/// Elements whose content never belongs in the extracted text
const NOISE_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "aside", "iframe", "noscript", "svg",
];

/// Elements that end a line of visible text
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "tr",
];

static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("Invalid selector"));

/// Extract the visible text of an HTML document and clean it
pub fn extract_html(raw: &str) -> Extraction {
    let text = block_text(raw, BLOCK_TAGS);
    let raw_chars = text.chars().count();
    let text = MarkupNormalizer.normalize(&text);
    Extraction { raw_chars, text }
}

/// Collect the visible body text of `raw`, inserting a newline after every
/// element whose tag appears in `block_tags`.
pub(crate) fn block_text(raw: &str, block_tags: &[&str]) -> String {
    let document = Html::parse_document(raw);
    let mut out = String::new();
    if let Some(body) = document.select(&BODY_SELECTOR).next() {
        for child in body.children() {
            collect_text(child, block_tags, &mut out);
        }
    }
    out
}

fn collect_text(node: NodeRef<'_, Node>, block_tags: &[&str], out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            let tag = element.name();
            if NOISE_TAGS.contains(&tag) {
                return;
            }
            if tag == "br" {
                out.push('\n');
                return;
            }
            for child in node.children() {
                collect_text(child, block_tags, out);
            }
            if block_tags.contains(&tag) {
                out.push('\n');
            }
        }
        _ => {
            for child in node.children() {
                collect_text(child, block_tags, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_become_lines() {
        let extraction = extract_html("<h1>Title</h1><p>Body</p>");
        assert_eq!(extraction.text, "Title\nBody");
    }

    #[test]
    fn test_noise_elements_are_dropped() {
        let raw = "<body><script>var x = 1;</script><nav>Menu</nav><p>Keep me</p></body>";
        assert_eq!(extract_html(raw).text, "Keep me");
    }

    #[test]
    fn test_br_breaks_the_line() {
        assert_eq!(extract_html("<p>one<br>two</p>").text, "one\ntwo");
    }

    #[test]
    fn test_head_content_is_ignored() {
        let raw = "<html><head><title>Ignored</title></head><body><p>Visible</p></body></html>";
        assert_eq!(extract_html(raw).text, "Visible");
    }

    #[test]
    fn test_table_rows_become_lines() {
        let raw = "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>";
        let text = extract_html(raw).text;
        assert_eq!(text, "ab\nc");
    }

    #[test]
    fn test_inline_markup_is_flattened() {
        let raw = "<p>Some <em>emphasis</em> and <strong>bold</strong>.</p>";
        assert_eq!(extract_html(raw).text, "Some emphasis and bold.");
    }
}
