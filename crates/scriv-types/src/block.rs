//! Block types: the kind enumeration, the persisted record, and the
//! caller-supplied draft.
//!
//! ## Design: caller-managed positions
//!
//! A block's `position` is an integer ordering key supplied by the caller at
//! creation or update time. The store never renumbers, validates, or shifts
//! positions: gaps are tolerated (order is by value, not contiguity) and
//! duplicates are permitted, with insertion order breaking ties. Reordering a
//! document means rewriting the positions of the blocks the caller moves.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::ids::{BlockId, DocumentId};

/// Open key-value metadata attached to a block — formatting hints,
/// attributes. Opaque to the store; any JSON object is accepted.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// What a block *is* (content type).
///
/// Closed enumeration; the type tag is set at creation and only changes when
/// the caller full-replaces the block through an update. Content semantics
/// depend on the kind but storage treats the payload as opaque text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BlockKind {
    /// Prose paragraph.
    #[default]
    Paragraph,
    /// Section heading.
    Heading,
    /// Single list item (lists are flat sequences of these).
    ListItem,
    /// Code, verbatim.
    Code,
    /// Block quotation.
    Quote,
}

impl BlockKind {
    /// Parse from string (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::ListItem => "list_item",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted block: one typed content unit within a document.
///
/// `document_id` is a lookup key back to the owning document, not an
/// ownership pointer — the document row owns the authoritative child set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block ID (UUIDv7, store-generated).
    pub id: BlockId,
    /// Owning document.
    pub document_id: DocumentId,
    /// Content type tag.
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Text payload; semantics depend on `kind`, storage is opaque.
    pub content: String,
    /// Caller-supplied ordering key within the document.
    pub position: i64,
    /// Open metadata object.
    #[serde(default)]
    pub metadata: Metadata,
    /// Timestamp when the block was created (Unix millis).
    pub created_at: u64,
    /// Timestamp of the last field mutation (Unix millis).
    pub updated_at: u64,
}

impl Block {
    /// Materialize a draft into a fresh block under `document_id`.
    ///
    /// Generates a new ID and stamps both timestamps with the same instant.
    pub fn from_draft(document_id: DocumentId, draft: BlockDraft) -> Self {
        let now = crate::now_millis();
        Self {
            id: BlockId::new(),
            document_id,
            kind: draft.kind,
            content: draft.content,
            position: draft.position,
            metadata: draft.metadata,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The caller-supplied field set for a block.
///
/// Used both when creating a block and when updating one: updates are
/// full-replace over exactly these four fields, so a caller omitting a field
/// is a validation failure at the boundary, never a silent default inside
/// the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockDraft {
    /// Content type tag.
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Text payload.
    pub content: String,
    /// Ordering key; duplicates and gaps are fine.
    pub position: i64,
    /// Open metadata object; defaults to empty.
    #[serde(default)]
    pub metadata: Metadata,
}

impl BlockDraft {
    /// Create a draft with empty metadata.
    pub fn new(kind: BlockKind, content: impl Into<String>, position: i64) -> Self {
        Self {
            kind,
            content: content.into(),
            position,
            metadata: Metadata::new(),
        }
    }

    /// Builder: attach a metadata entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
