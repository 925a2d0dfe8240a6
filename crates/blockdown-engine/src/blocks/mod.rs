//! # Block Data Model
//!
//! The shared vocabulary between the renderer and the segmenter: an article
//! body is a [`Document`] holding an ordered sequence of [`Block`]s, stored
//! as editor-style JSON (`{"type": ..., "data": {...}}` per block).
//!
//! Two layers of leniency keep stored content readable no matter what is in
//! the database:
//!
//! - Payload structs use `#[serde(default)]`, so a missing field becomes an
//!   empty value and the renderer's voiding rules decide what to do with it.
//! - Any block that doesn't decode as a [`ContentBlock`] (unrecognized tag,
//!   type-mismatched field) falls back to [`Block::Unknown`], which keeps the
//!   raw JSON value so it survives a save/load cycle untouched. The renderer
//!   skips it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Schema version tag written by the segmenter, matching the editor that
/// produced the originally stored documents.
pub const SCHEMA_VERSION: &str = "2.28.2";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An article body: ordered blocks plus opaque editor metadata.
///
/// Block order is rendering order. `time` and `version` are carried through
/// storage but mean nothing to the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Document {
    /// Tolerant boundary for stored JSON of unknown shape.
    ///
    /// A value without a `blocks` array yields an empty document rather than
    /// an error; blocks that don't match any recognized shape are kept as
    /// [`Block::Unknown`].
    pub fn from_value(value: &Value) -> Self {
        let blocks = value
            .get("blocks")
            .and_then(Value::as_array)
            .map(|blocks| {
                blocks
                    .iter()
                    .map(|b| {
                        serde_json::from_value(b.clone())
                            .unwrap_or_else(|_| Block::Unknown(b.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            time: value.get("time").and_then(Value::as_u64),
            blocks,
            version: value
                .get("version")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Parse stored document JSON. Only syntactically invalid JSON fails;
    /// shape problems degrade via [`Document::from_value`].
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }
}

/// One stored block: either a recognized [`ContentBlock`] or an opaque JSON
/// value preserved for round-tripping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Block {
    Known(ContentBlock),
    Unknown(Value),
}

/// The closed set of recognized block kinds.
///
/// Adding a variant here extends the renderer's exhaustive dispatch; tags
/// outside this set land in [`Block::Unknown`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ContentBlock {
    Paragraph(ParagraphData),
    Header(HeaderData),
    List(ListData),
    Quote(QuoteData),
    Delimiter(DelimiterData),
    Table(TableData),
    Code(CodeData),
    Raw(RawData),
    Embed(EmbedData),
    Image(ImageData),
    LinkTool(LinkToolData),
    BusinessProcess(BusinessProcessData),
    ControlMatrix(ControlMatrixData),
    RoleDefinition(RoleDefinitionData),
    MaturityModel(MaturityModelData),
    ProcessFlow(ProcessFlowData),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphData {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderData {
    pub text: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListData {
    pub style: ListStyle,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteData {
    pub text: String,
    pub caption: String,
}

/// Delimiter blocks carry an empty payload on the wire (`"data": {}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DelimiterData {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableData {
    pub content: Vec<Vec<String>>,
    pub with_headings: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeData {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawData {
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedData {
    pub embed: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageData {
    pub file: ImageFile,
    pub caption: String,
    pub with_border: bool,
    pub with_background: bool,
    pub stretched: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageFile {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkToolData {
    pub link: String,
    pub meta: LinkMeta,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkMeta {
    pub title: String,
    pub description: String,
    pub image: ImageFile,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProcessData {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessStep {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlMatrixData {
    pub controls: Vec<Control>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Control {
    pub id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub control_type: String,
    pub risk: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleDefinitionData {
    pub title: String,
    pub department: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaturityModelData {
    pub domain: String,
    pub levels: Vec<MaturityLevel>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaturityLevel {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessFlowData {
    pub title: String,
    pub steps: Vec<FlowStep>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowStep {
    pub text: String,
}
