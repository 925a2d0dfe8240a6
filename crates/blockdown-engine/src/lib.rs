//! Core conversion engine for block-structured article content.
//!
//! Two independent components composed only through the shared block model:
//! [`render`] turns a stored [`Document`] into HTML, and [`segment`] turns
//! legacy markdown into a [`Document`] the renderer accepts. Both are pure,
//! synchronous, and infallible by design; persistence and routing live in
//! the callers.

pub mod blocks;
pub mod render;
pub mod segment;

// Re-export key types for easier usage
pub use blocks::{Block, ContentBlock, Document, ListStyle, ParseError, SCHEMA_VERSION};
pub use render::{render, render_value};
pub use segment::segment;
