//! Inline text formatting for prose-carrying blocks.
//!
//! Editor-produced text arrives with a small amount of literal inline markup
//! (`<b>`, `<a href="...">`, ...). The whole string is HTML-escaped and only
//! a fixed allow-list of tags is re-admitted, in three well-formed shapes:
//! bare opening tag, closing tag, and opening tag with a single double-quoted
//! attribute clause. Everything else stays escaped.
//!
//! Trust assumption: this is tuned for text our own editor emits, not for
//! arbitrary attacker-controlled markup. Malformed nesting is not repaired,
//! and an attribute value that was already entity-encoded gets encoded again.

use regex::Regex;
use std::sync::OnceLock;

/// Inline tags that survive escaping, matching the editor's formatting tools.
const ALLOWED_TAGS: &[&str] = &["b", "i", "em", "strong", "a", "code", "mark"];

static ATTR_CLAUSE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches `name attr="value"` tag innards: one attribute, double-quoted,
/// no quotes or angle brackets in the value.
fn attr_clause_regex() -> &'static Regex {
    ATTR_CLAUSE_REGEX.get_or_init(|| {
        Regex::new(r#"^([a-zA-Z]+)\s+([a-zA-Z][a-zA-Z0-9-]*)="([^"<>]*)"$"#)
            .expect("invalid attribute clause regex")
    })
}

/// Escape `text` in full, then restore allow-listed inline tags.
pub fn format_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(lt) = rest.find('<') {
        out.push_str(&html_escape::encode_text(&rest[..lt]));
        let after = &rest[lt + 1..];

        match after.find('>') {
            Some(gt) if !after[..gt].contains('<') => {
                if let Some(tag) = restore_tag(&after[..gt]) {
                    out.push_str(&tag);
                    rest = &after[gt + 1..];
                } else {
                    out.push_str("&lt;");
                    rest = after;
                }
            }
            // No closing `>` before the next `<` (or at all): escape just
            // the `<` and keep scanning.
            _ => {
                out.push_str("&lt;");
                rest = after;
            }
        }
    }

    out.push_str(&html_escape::encode_text(rest));
    out
}

/// Escape text with no inline tag allowance (headers, code, captions, cells
/// of structured sub-blocks).
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// Rebuild the literal tag for recognized innards, or `None` to escape them.
fn restore_tag(inner: &str) -> Option<String> {
    let name = inner.strip_prefix('/').unwrap_or(inner);
    if ALLOWED_TAGS.contains(&name) {
        return Some(format!("<{inner}>"));
    }
    if inner.starts_with('/') {
        return None;
    }

    let caps = attr_clause_regex().captures(inner)?;
    let tag = caps.get(1)?.as_str();
    if !ALLOWED_TAGS.contains(&tag) {
        return None;
    }
    let attr = caps.get(2)?.as_str();
    // The value cannot contain quotes or angle brackets (regex), so only
    // ampersands need re-encoding.
    let value = html_escape::encode_text(caps.get(3)?.as_str());
    Some(format!(r#"<{tag} {attr}="{value}">"#))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("plain text", "plain text")]
    #[case("<b>bold</b>", "<b>bold</b>")]
    #[case("<i>x</i> and <em>y</em>", "<i>x</i> and <em>y</em>")]
    #[case("<mark>hi</mark>", "<mark>hi</mark>")]
    #[case("<code>a < b</code>", "<code>a &lt; b</code>")]
    fn allowed_tags_survive(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_inline(input), expected);
    }

    #[test]
    fn anchor_with_href_survives() {
        assert_eq!(
            format_inline(r#"<a href="https://example.com">link</a>"#),
            r#"<a href="https://example.com">link</a>"#
        );
    }

    #[test]
    fn attribute_value_is_reescaped() {
        assert_eq!(
            format_inline(r#"<a href="/a?b=1&c=2">x</a>"#),
            r#"<a href="/a?b=1&amp;c=2">x</a>"#
        );
    }

    #[rstest]
    #[case("<script>alert(1)</script>", "&lt;script&gt;alert(1)&lt;/script&gt;")]
    #[case("<div>x</div>", "&lt;div&gt;x&lt;/div&gt;")]
    #[case(
        r#"<a href="x" onclick="evil()">x</a>"#,
        r#"&lt;a href="x" onclick="evil()"&gt;x</a>"#
    )]
    #[case("<a href='x'>x</a>", "&lt;a href='x'&gt;x</a>")]
    fn disallowed_markup_stays_escaped(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_inline(input), expected);
    }

    #[test]
    fn bare_ampersand_escapes() {
        assert_eq!(format_inline("fish & chips"), "fish &amp; chips");
    }

    #[test]
    fn unterminated_angle_bracket_escapes() {
        assert_eq!(format_inline("a < b"), "a &lt; b");
        assert_eq!(format_inline("<b"), "&lt;b");
    }

    #[test]
    fn angle_before_tag_does_not_eat_the_tag() {
        assert_eq!(format_inline("<<b>x</b>"), "&lt;<b>x</b>");
    }

    #[test]
    fn idempotent_on_clean_allowed_markup() {
        let input = "<b>x</b> and <a href=\"https://example.com\">y</a>";
        assert_eq!(format_inline(input), input);
    }

    #[test]
    fn escape_has_no_allowance() {
        assert_eq!(escape("<b>x</b>"), "&lt;b&gt;x&lt;/b&gt;");
    }
}
