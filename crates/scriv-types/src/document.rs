//! Document types: the metadata record and the aggregate snapshot.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::ids::DocumentId;

/// Document metadata — the container row without its blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document ID (UUIDv7, store-generated).
    pub id: DocumentId,
    /// Human-facing title.
    pub title: String,
    /// Timestamp when the document was created (Unix millis).
    pub created_at: u64,
    /// Timestamp of the last mutation of the document row itself (Unix
    /// millis). Block mutations stamp the block, not the document.
    pub updated_at: u64,
}

impl Document {
    /// Create a new document record with a fresh ID.
    pub fn new(title: impl Into<String>) -> Self {
        let now = crate::now_millis();
        Self {
            id: DocumentId::new(),
            title: title.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A document together with its blocks — the aggregate read/write unit the
/// boundary layer consumes.
///
/// Invariant: `blocks` is sorted ascending by position, insertion order
/// breaking ties. Every producer of a snapshot upholds this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub id: DocumentId,
    pub title: String,
    /// Blocks in document order.
    pub blocks: Vec<Block>,
    pub created_at: u64,
    pub updated_at: u64,
}

impl DocumentSnapshot {
    /// Assemble a snapshot from a metadata row and its ordered blocks.
    pub fn new(document: Document, blocks: Vec<Block>) -> Self {
        Self {
            id: document.id,
            title: document.title,
            blocks,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }

    /// The number of blocks in the document.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockDraft, BlockKind};

    #[test]
    fn test_new_document_stamps_both_timestamps() {
        let doc = Document::new("Draft");
        assert_eq!(doc.title, "Draft");
        assert_eq!(doc.created_at, doc.updated_at);
    }

    #[test]
    fn test_snapshot_assembly() {
        let doc = Document::new("Draft");
        let block = Block::from_draft(doc.id, BlockDraft::new(BlockKind::Paragraph, "p", 0));
        let snap = DocumentSnapshot::new(doc.clone(), vec![block]);
        assert_eq!(snap.id, doc.id);
        assert_eq!(snap.len(), 1);
        assert!(!snap.is_empty());
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let doc = Document::new("Draft");
        let snap = DocumentSnapshot::new(doc, vec![]);
        let json = serde_json::to_string(&snap).unwrap();
        let parsed: DocumentSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, parsed);
    }
}
