//! Inline markdown conversion for imported text.
//!
//! Paragraph bodies and list item texts pass through a real markdown
//! renderer so `**bold**`, `` `code` `` and `[links](...)` become the literal
//! inline tags the block renderer's allow-list re-admits. A single wrapping
//! `<p>...</p>` is stripped so the result reads as inline text inside its
//! block.

use pulldown_cmark::{Options, Parser, html};

pub fn markdown_to_html(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(trimmed, Options::empty()));

    let out = out.trim();
    match out.strip_prefix("<p>").and_then(|s| s.strip_suffix("</p>")) {
        Some(inner) => inner.to_string(),
        None => out.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_stays_plain() {
        assert_eq!(markdown_to_html("Some text."), "Some text.");
    }

    #[test]
    fn emphasis_becomes_inline_tags() {
        assert_eq!(
            markdown_to_html("Some **bold** and *leaning* text"),
            "Some <strong>bold</strong> and <em>leaning</em> text"
        );
    }

    #[test]
    fn code_spans_become_code_tags() {
        assert_eq!(markdown_to_html("use `cargo`"), "use <code>cargo</code>");
    }

    #[test]
    fn links_become_anchors() {
        assert_eq!(
            markdown_to_html("[site](https://example.com)"),
            "<a href=\"https://example.com\">site</a>"
        );
    }

    #[test]
    fn multi_line_text_keeps_soft_breaks() {
        assert_eq!(markdown_to_html("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn blank_input_yields_empty() {
        assert_eq!(markdown_to_html(""), "");
        assert_eq!(markdown_to_html("   \n  "), "");
    }
}
