//! Document aggregate service — the seam the transport layer consumes.
//!
//! Presents a document plus its blocks as one read/write unit and mediates
//! between boundary payloads and the store. No business logic lives here
//! beyond what the store already enforces; every method is a direct
//! delegation under the connection lock.

use std::sync::Arc;

use parking_lot::Mutex;

use scriv_types::{Block, BlockDraft, BlockId, Document, DocumentId, DocumentSnapshot};

use crate::db::DocumentDb;
use crate::error::Result;

/// Cheaply cloneable handle over the store.
///
/// SQLite serializes writers anyway; a single locked connection keeps each
/// request a single atomic unit of work without cross-request coordination.
#[derive(Clone)]
pub struct DocumentService {
    db: Arc<Mutex<DocumentDb>>,
}

impl DocumentService {
    /// Wrap an opened store.
    pub fn new(db: DocumentDb) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Create a document with its initial blocks, atomically.
    pub fn create_document(&self, title: &str, blocks: Vec<BlockDraft>) -> Result<DocumentSnapshot> {
        self.db.lock().create_document(title, blocks)
    }

    /// Read the aggregate: document plus blocks in document order.
    pub fn document(&self, id: DocumentId) -> Result<DocumentSnapshot> {
        self.db.lock().document(id)
    }

    /// List document metadata rows, most recently updated first.
    pub fn documents(&self) -> Result<Vec<Document>> {
        self.db.lock().documents()
    }

    /// Add one block to an existing document.
    pub fn add_block(&self, document_id: DocumentId, draft: BlockDraft) -> Result<Block> {
        self.db.lock().add_block(document_id, draft)
    }

    /// Fetch one block under a document.
    pub fn block(&self, document_id: DocumentId, block_id: BlockId) -> Result<Block> {
        self.db.lock().block(document_id, block_id)
    }

    /// Full-replace update of one block.
    pub fn update_block(
        &self,
        document_id: DocumentId,
        block_id: BlockId,
        draft: BlockDraft,
    ) -> Result<Block> {
        self.db.lock().update_block(document_id, block_id, draft)
    }

    /// Delete one block permanently.
    pub fn delete_block(&self, document_id: DocumentId, block_id: BlockId) -> Result<()> {
        self.db.lock().delete_block(document_id, block_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use scriv_types::BlockKind;

    fn service() -> DocumentService {
        DocumentService::new(DocumentDb::in_memory().unwrap())
    }

    #[test]
    fn test_end_to_end_aggregate_flow() {
        let svc = service();

        let snap = svc
            .create_document(
                "Draft",
                vec![
                    BlockDraft::new(BlockKind::Paragraph, "B", 1),
                    BlockDraft::new(BlockKind::Heading, "A", 0),
                ],
            )
            .unwrap();
        assert_eq!(snap.blocks[0].content, "A");

        let quote = svc
            .add_block(snap.id, BlockDraft::new(BlockKind::Quote, "Q", 5))
            .unwrap();
        svc.update_block(snap.id, quote.id, BlockDraft::new(BlockKind::Quote, "Q2", 5))
            .unwrap();
        svc.delete_block(snap.id, snap.blocks[0].id).unwrap();

        let after = svc.document(snap.id).unwrap();
        let contents: Vec<_> = after.blocks.iter().map(|b| b.content.as_str()).collect();
        assert_eq!(contents, vec!["B", "Q2"]);
    }

    #[test]
    fn test_clones_share_the_store() {
        let svc = service();
        let other = svc.clone();

        let doc = svc.create_document("shared", vec![]).unwrap();
        assert_eq!(other.document(doc.id).unwrap().title, "shared");
    }

    #[test]
    fn test_not_found_passes_through() {
        let svc = service();
        let err = svc.document(DocumentId::new()).unwrap_err();
        assert!(matches!(err, StoreError::DocumentNotFound(_)));
    }
}
