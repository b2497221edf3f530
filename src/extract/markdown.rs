//! Markdown text extraction
//!
//! Renders Markdown to HTML first, then reuses the HTML block walk with a
//! block set suited to rendered Markdown. Going through HTML keeps the two
//! markup formats on one extraction path.

use pulldown_cmark::{Options, Parser};

use crate::extract::html::block_text;
use crate::extract::Extraction;
use crate::normalize::{MarkupNormalizer, Normalizer};

/// Elements that end a line in rendered Markdown
const BLOCK_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "ul", "ol", "li", "blockquote", "pre",
];

/// Extract the visible text of a Markdown document and clean it
pub fn extract_markdown(raw: &str) -> Extraction {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(raw, options);

    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);

    let text = block_text(&html, BLOCK_TAGS);
    let raw_chars = text.chars().count();
    let text = MarkupNormalizer.normalize(&text);
    Extraction { raw_chars, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_paragraph() {
        let extraction = extract_markdown("# Heading\n\nSome *text*.");
        assert_eq!(extraction.text, "Heading\n\nSome text.");
    }

    #[test]
    fn test_list_items_become_lines() {
        let extraction = extract_markdown("- one\n- two");
        assert_eq!(extraction.text, "one\n\ntwo");
    }

    #[test]
    fn test_inline_code_and_links_keep_their_text() {
        let extraction = extract_markdown("Use [the docs](https://example.com) and `cargo`.");
        assert_eq!(extraction.text, "Use the docs and cargo.");
    }

    #[test]
    fn test_fenced_code_is_kept_as_text() {
        let extraction = extract_markdown("```\nlet x = 1;\n```");
        assert_eq!(extraction.text, "let x = 1;");
    }
}
