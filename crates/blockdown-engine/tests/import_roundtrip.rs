//! The one-time import path: legacy markdown through the segmenter, then
//! through the renderer, as stored articles experience it.

use blockdown_engine::{Document, render, segment};
use pretty_assertions::assert_eq;

#[test]
fn code_fence_round_trips_verbatim() {
    let markdown = "```\nfn main() { println!(\"1 < 2\"); }\n```\n";
    let html = render(&segment(markdown));
    // Escaped exactly once, no markdown reinterpretation of code contents.
    assert_eq!(
        html,
        "<pre><code>fn main() { println!(\"1 &lt; 2\"); }</code></pre>"
    );
}

#[test]
fn imported_page_renders_in_source_order() {
    let markdown = "\
# Operating Model

An article about **structure**.

## Steps

1. map the processes
2. assign owners

- unordered note
";
    let html = render(&segment(markdown));

    let positions: Vec<usize> = [
        "<h1 class=\"article-prose\">Operating Model</h1>",
        "<p class=\"article-prose\">An article about <strong>structure</strong>.</p>",
        "<h2 class=\"article-prose\">Steps</h2>",
        "<ol class=\"article-prose\"><li>map the processes</li><li>assign owners</li></ol>",
        "<ul class=\"article-prose\"><li>unordered note</li></ul>",
    ]
    .iter()
    .map(|fragment| html.find(fragment).unwrap_or_else(|| panic!("missing {fragment:?} in {html}")))
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn segmenter_output_matches_renderer_input_contract() {
    let doc = segment("# T\n\ntext\n");
    let stored = serde_json::to_string(&doc).unwrap();
    let reloaded = Document::from_json(&stored).unwrap();
    assert_eq!(reloaded, doc);
    assert_eq!(render(&reloaded), render(&doc));
}

#[test]
fn markdown_heading_markup_is_escaped_at_render_time() {
    // Heading text is stored plain and escaped by the renderer.
    let html = render(&segment("# Profit & Loss\n"));
    assert_eq!(html, "<h1 class=\"article-prose\">Profit &amp; Loss</h1>");
}

#[test]
fn empty_markdown_renders_empty() {
    assert_eq!(render(&segment("")), "");
}
