//! # Block Rendering
//!
//! Converts a [`Document`] into semantic HTML for direct embedding into a
//! page template. Rendering is defensive and infallible: a block with no
//! meaningful content contributes nothing (a "voided" block), unknown block
//! tags are skipped, and a malformed document shape renders as the empty
//! string. Fragment order equals block order; non-empty fragments are joined
//! with a newline.

pub mod business;
pub mod inline;

use crate::blocks::{
    Block, CodeData, ContentBlock, Document, EmbedData, HeaderData, ImageData, LinkToolData,
    ListData, ListStyle, ParagraphData, QuoteData, RawData, TableData,
};

use inline::{escape, escape_attr, format_inline};

/// Render a document to HTML. Never fails; an empty document renders as the
/// empty string.
pub fn render(document: &Document) -> String {
    let fragments: Vec<String> = document
        .blocks
        .iter()
        .filter_map(|block| match block {
            Block::Known(content) => fragment(content),
            Block::Unknown(_) => None,
        })
        .collect();
    fragments.join("\n")
}

/// Render an arbitrary JSON value holding a stored document. Values without
/// a `blocks` array render as the empty string rather than failing.
pub fn render_value(value: &serde_json::Value) -> String {
    render(&Document::from_value(value))
}

fn fragment(content: &ContentBlock) -> Option<String> {
    match content {
        ContentBlock::Paragraph(data) => paragraph(data),
        ContentBlock::Header(data) => header(data),
        ContentBlock::List(data) => list(data),
        ContentBlock::Quote(data) => quote(data),
        ContentBlock::Delimiter(_) => Some("<hr>".to_string()),
        ContentBlock::Table(data) => table(data),
        ContentBlock::Code(data) => code(data),
        ContentBlock::Raw(data) => raw(data),
        ContentBlock::Embed(data) => embed(data),
        ContentBlock::Image(data) => image(data),
        ContentBlock::LinkTool(data) => link_tool(data),
        ContentBlock::BusinessProcess(data) => business::business_process(data),
        ContentBlock::ControlMatrix(data) => business::control_matrix(data),
        ContentBlock::RoleDefinition(data) => business::role_definition(data),
        ContentBlock::MaturityModel(data) => business::maturity_model(data),
        ContentBlock::ProcessFlow(data) => business::process_flow(data),
    }
}

fn paragraph(data: &ParagraphData) -> Option<String> {
    let text = format_inline(&data.text);
    if text.trim().is_empty() {
        return None;
    }
    Some(format!("<p class=\"article-prose\">{text}</p>"))
}

fn header(data: &HeaderData) -> Option<String> {
    let text = escape(&data.text);
    if text.trim().is_empty() {
        return None;
    }
    let level = data.level.clamp(1, 6);
    Some(format!("<h{level} class=\"article-prose\">{text}</h{level}>"))
}

fn list(data: &ListData) -> Option<String> {
    let tag = match data.style {
        ListStyle::Ordered => "ol",
        ListStyle::Unordered => "ul",
    };

    let items: Vec<String> = data
        .items
        .iter()
        .map(|item| format_inline(item))
        .filter(|item| !item.trim().is_empty())
        .map(|item| format!("<li>{item}</li>"))
        .collect();
    if items.is_empty() {
        return None;
    }

    Some(format!(
        "<{tag} class=\"article-prose\">{}</{tag}>",
        items.concat()
    ))
}

fn quote(data: &QuoteData) -> Option<String> {
    let text = format_inline(&data.text);
    if text.trim().is_empty() {
        return None;
    }

    let mut html = format!("<blockquote class=\"article-prose\">{text}");
    let caption = escape(&data.caption);
    if !caption.is_empty() {
        html.push_str(&format!("<cite>{caption}</cite>"));
    }
    html.push_str("</blockquote>");
    Some(html)
}

fn table(data: &TableData) -> Option<String> {
    // An empty or missing first row voids the whole block.
    if data.content.first().is_none_or(|row| row.is_empty()) {
        return None;
    }

    let rows: Vec<String> = data
        .content
        .iter()
        .enumerate()
        .filter(|(_, row)| !row.is_empty())
        .map(|(i, row)| {
            let cell_tag = if data.with_headings && i == 0 { "th" } else { "td" };
            let cells: String = row
                .iter()
                .map(|cell| format!("<{cell_tag}>{}</{cell_tag}>", format_inline(cell)))
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    if data.with_headings {
        let (head, body) = rows.split_first()?;
        Some(format!(
            "<table class=\"article-prose\"><thead>{head}</thead><tbody>{}</tbody></table>",
            body.concat()
        ))
    } else {
        Some(format!(
            "<table class=\"article-prose\"><tbody>{}</tbody></table>",
            rows.concat()
        ))
    }
}

fn code(data: &CodeData) -> Option<String> {
    let code = escape(&data.code);
    if code.trim().is_empty() {
        return None;
    }
    Some(format!("<pre><code>{code}</code></pre>"))
}

/// Raw HTML passes through unescaped. This is an explicit trust boundary:
/// the editor side is responsible for sanitizing anything stored in a raw
/// block.
fn raw(data: &RawData) -> Option<String> {
    if data.html.is_empty() {
        return None;
    }
    Some(data.html.clone())
}

fn embed(data: &EmbedData) -> Option<String> {
    if data.embed.is_empty() {
        return None;
    }

    let mut html = String::from("<div class=\"embed-container my-8 text-center\">");
    html.push_str(&format!(
        "<iframe src=\"{}\" class=\"w-full h-96 border rounded\"></iframe>",
        escape_attr(&data.embed)
    ));
    let caption = escape(&data.caption);
    if !caption.is_empty() {
        html.push_str(&format!(
            "<p class=\"text-sm text-gray-500 mt-2\">{caption}</p>"
        ));
    }
    html.push_str("</div>");
    Some(html)
}

fn image(data: &ImageData) -> Option<String> {
    if data.file.url.is_empty() {
        return None;
    }

    let mut classes = String::from("max-w-full h-auto");
    if data.with_border {
        classes.push_str(" border border-gray-200");
    }
    if data.with_background {
        classes.push_str(" bg-gray-50 p-4");
    }
    if data.stretched {
        classes.push_str(" w-full");
    }

    let mut html = String::from("<figure class=\"my-8 text-center\">");
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" class=\"{classes}\">",
        escape_attr(&data.file.url),
        escape_attr(&data.caption)
    ));
    let caption = escape(&data.caption);
    if !caption.is_empty() {
        html.push_str(&format!(
            "<figcaption class=\"text-sm text-gray-500 mt-2 italic\">{caption}</figcaption>"
        ));
    }
    html.push_str("</figure>");
    Some(html)
}

fn link_tool(data: &LinkToolData) -> Option<String> {
    if data.link.is_empty() {
        return None;
    }

    let title = escape(&data.meta.title);
    let description = escape(&data.meta.description);

    let mut html = String::from(
        "<div class=\"link-preview border border-gray-200 rounded-lg p-6 my-8 hover:bg-gray-50 transition-colors\">",
    );
    html.push_str(&format!(
        "<a href=\"{}\" class=\"block text-decoration-none\" target=\"_blank\" rel=\"noopener noreferrer\">",
        escape_attr(&data.link)
    ));

    if !data.meta.image.url.is_empty() {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{title}\" class=\"w-full h-32 object-cover rounded mb-4\">",
            escape_attr(&data.meta.image.url)
        ));
    }
    if !title.is_empty() {
        html.push_str(&format!(
            "<h4 class=\"text-lg font-medium text-gray-900 mb-2\">{title}</h4>"
        ));
    }
    if !description.is_empty() {
        html.push_str(&format!("<p class=\"text-gray-600 text-sm\">{description}</p>"));
    }

    html.push_str(&format!(
        "<p class=\"text-blue-600 text-sm mt-2\">{}</p>",
        escape(&data.link)
    ));
    html.push_str("</a></div>");
    Some(html)
}
