//! Line classification for the segmentation phase.
//!
//! Each line is classified independently into a [`LineKind`] containing only
//! local facts; the [`builder`](super::builder) state machine decides what to
//! do with it. Classification is first-match in a fixed priority order:
//! fence delimiter, heading, list item, blank, plain text.

use crate::blocks::ListStyle;

/// What a single source line looks like on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// A ``` line: opens a fence, or closes the one currently open.
    FenceDelimiter,
    /// `#`-prefixed heading with its level (1-6) and trimmed text.
    Heading { level: u8, text: &'a str },
    /// A `- ` / `* ` / `N. ` list item with its trimmed text.
    ListItem { style: ListStyle, text: &'a str },
    Text,
}

/// Classify one line. First match wins; a line that is both nothing else and
/// non-blank is plain text.
pub fn classify(line: &str) -> LineKind<'_> {
    if CodeFence::is_delimiter(line) {
        return LineKind::FenceDelimiter;
    }
    if let Some((level, text)) = Heading::parse(line) {
        return LineKind::Heading { level, text };
    }
    if let Some((style, text)) = ListMarker::parse(line) {
        return LineKind::ListItem { style, text };
    }
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    LineKind::Text
}

pub struct CodeFence;

impl CodeFence {
    pub const DELIMITER: &'static str = "```";

    /// A fence line is any line starting with the delimiter; an opener may
    /// carry a language tag (```` ```rust ````) which is ignored.
    pub fn is_delimiter(line: &str) -> bool {
        line.starts_with(Self::DELIMITER)
    }
}

pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// 1-6 `#` markers followed by at least one whitespace character.
    /// Seven or more markers, or no whitespace, is not a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > 6 {
            return None;
        }
        let rest = &line[level..];
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some((level as u8, rest.trim()))
    }
}

pub struct ListMarker;

impl ListMarker {
    /// `- ` or `* ` (unordered) or `N. ` (ordered), each requiring
    /// whitespace after the marker. Returns the style and trimmed item text.
    pub fn parse(line: &str) -> Option<(ListStyle, &str)> {
        if let Some(rest) = line.strip_prefix(['-', '*']) {
            return Self::after_marker(rest).map(|text| (ListStyle::Unordered, text));
        }

        let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits > 0
            && let Some(rest) = line[digits..].strip_prefix('.')
        {
            return Self::after_marker(rest).map(|text| (ListStyle::Ordered, text));
        }

        None
    }

    fn after_marker(rest: &str) -> Option<&str> {
        let text = rest.trim_start();
        // No whitespace after the marker means `-foo` / `1.foo`: not a list.
        if text.len() == rest.len() {
            return None;
        }
        Some(text.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence_delimiter() {
        assert!(CodeFence::is_delimiter("```"));
        assert!(CodeFence::is_delimiter("```rust"));
        assert!(!CodeFence::is_delimiter("`` not a fence"));
        assert!(!CodeFence::is_delimiter(" ```"));
    }

    #[test]
    fn heading_levels() {
        assert_eq!(Heading::parse("# Title"), Some((1, "Title")));
        assert_eq!(Heading::parse("###### Deep"), Some((6, "Deep")));
        assert_eq!(Heading::parse("### spaced out   "), Some((3, "spaced out")));
    }

    #[test]
    fn not_headings() {
        assert_eq!(Heading::parse("####### seven"), None);
        assert_eq!(Heading::parse("#nospace"), None);
        assert_eq!(Heading::parse("plain"), None);
    }

    #[test]
    fn heading_with_no_text_still_matches() {
        assert_eq!(Heading::parse("## "), Some((2, "")));
    }

    #[test]
    fn unordered_markers() {
        assert_eq!(ListMarker::parse("- item"), Some((ListStyle::Unordered, "item")));
        assert_eq!(ListMarker::parse("* item"), Some((ListStyle::Unordered, "item")));
        assert_eq!(ListMarker::parse("-no space"), None);
        assert_eq!(ListMarker::parse("-"), None);
    }

    #[test]
    fn ordered_markers() {
        assert_eq!(ListMarker::parse("1. first"), Some((ListStyle::Ordered, "first")));
        assert_eq!(ListMarker::parse("12. twelfth"), Some((ListStyle::Ordered, "twelfth")));
        assert_eq!(ListMarker::parse("1.attached"), None);
        assert_eq!(ListMarker::parse("1)"), None);
    }

    #[test]
    fn classification_priority() {
        assert_eq!(classify("```"), LineKind::FenceDelimiter);
        assert_eq!(classify("# h"), LineKind::Heading { level: 1, text: "h" });
        assert_eq!(
            classify("- i"),
            LineKind::ListItem { style: ListStyle::Unordered, text: "i" }
        );
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("words"), LineKind::Text);
    }
}
