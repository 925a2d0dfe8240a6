//! Push-per-line block construction.
//!
//! [`BlockBuilder`] receives classified lines in source order and emits
//! blocks as leaves open and close. Stop conditions are centralized here:
//! a paragraph flushes on blank, heading, fence, or list-item lines, so it
//! can never swallow a following structural element; a list run is pinned to
//! the orderedness of its first marker and a non-matching line is
//! re-dispatched rather than half-consumed.

use crate::blocks::{
    Block, CodeData, ContentBlock, HeaderData, ListData, ListStyle, ParagraphData,
};

use super::{classify::LineKind, markdown::markdown_to_html};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    Fence { lines: Vec<String> },
    List { style: ListStyle, items: Vec<String> },
}

pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str, kind: LineKind<'_>) {
        // An open fence is a raw zone: every line is verbatim content until
        // the closing delimiter.
        if self.in_fence() {
            if matches!(kind, LineKind::FenceDelimiter) {
                self.flush_fence();
            } else if let LeafState::Fence { lines } = &mut self.leaf {
                lines.push(line.to_string());
            }
            return;
        }

        match kind {
            LineKind::Blank => self.flush(),
            LineKind::FenceDelimiter => {
                self.flush();
                self.leaf = LeafState::Fence { lines: vec![] };
            }
            LineKind::Heading { level, text } => {
                self.flush();
                self.out.push(Block::Known(ContentBlock::Header(HeaderData {
                    text: text.to_string(),
                    level,
                })));
            }
            LineKind::ListItem { style, text } => self.push_list_item(style, text),
            LineKind::Text => {
                // A plain line ends a list run but extends a paragraph.
                if let LeafState::List { .. } = self.leaf {
                    self.flush();
                }
                match &mut self.leaf {
                    LeafState::Paragraph { lines } => lines.push(line.to_string()),
                    _ => {
                        self.leaf = LeafState::Paragraph {
                            lines: vec![line.to_string()],
                        }
                    }
                }
            }
        }
    }

    /// EOF: an unterminated fence closes implicitly, everything else
    /// flushes as usual.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_fence();
        self.flush();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn push_list_item(&mut self, style: ListStyle, text: &str) {
        match &mut self.leaf {
            LeafState::List { style: open_style, items } if *open_style == style => {
                items.push(markdown_to_html(text));
            }
            _ => {
                // Different marker kind or not in a list: close whatever is
                // open and start a fresh run.
                self.flush();
                self.leaf = LeafState::List {
                    style,
                    items: vec![markdown_to_html(text)],
                };
            }
        }
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None | LeafState::Fence { .. } => {}
            LeafState::Paragraph { lines } => {
                let text = markdown_to_html(&lines.join("\n"));
                if !text.is_empty() {
                    self.out
                        .push(Block::Known(ContentBlock::Paragraph(ParagraphData { text })));
                }
            }
            LeafState::List { style, items } => {
                self.out
                    .push(Block::Known(ContentBlock::List(ListData { style, items })));
            }
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence { lines } = prev {
            self.out.push(Block::Known(ContentBlock::Code(CodeData {
                code: lines.join("\n"),
            })));
        } else {
            // Put back non-fence leaves for the regular flush to handle.
            self.leaf = prev;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
