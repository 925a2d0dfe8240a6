//! # Markdown Segmentation
//!
//! Best-effort importer for legacy markdown pages: a single forward scan
//! over lines that emits the same block vocabulary the renderer consumes.
//!
//! Two phases, mirroring the layout of the renderer's counterpart on the
//! parsing side:
//!
//! 1. **Line classification** (`classify`): each line becomes a [`LineKind`]
//!    of local facts, first-match among fence delimiter / heading / list
//!    item / blank / text.
//! 2. **Block construction** (`builder`): a [`BlockBuilder`] state machine
//!    consumes classified lines in order and emits blocks.
//!
//! Heading text is stored as plain text (the renderer escapes it at read
//! time); paragraph and list item text pass through the inline markdown
//! converter (`markdown`); fenced code is verbatim, with an unterminated
//! fence implicitly closed at end of input.

pub mod builder;
pub mod classify;
pub mod markdown;

use std::time::{SystemTime, UNIX_EPOCH};

use crate::blocks::{Document, SCHEMA_VERSION};

pub use builder::BlockBuilder;
pub use classify::{LineKind, classify};

/// Segment raw markdown into a stored document.
///
/// Holds no cross-call state; block order equals source line order. The
/// result is stamped with the current time and the editor schema version,
/// both opaque to the renderer.
pub fn segment(markdown_text: &str) -> Document {
    Document {
        time: Some(unix_millis()),
        blocks: segment_blocks(markdown_text),
        version: Some(SCHEMA_VERSION.to_string()),
    }
}

/// The scan itself, without the metadata envelope.
pub fn segment_blocks(markdown_text: &str) -> Vec<crate::blocks::Block> {
    let mut builder = BlockBuilder::new();
    for line in markdown_text.lines() {
        builder.push(line, classify(line));
    }
    builder.finish()
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
