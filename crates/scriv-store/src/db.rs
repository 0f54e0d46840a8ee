//! SQLite persistence for documents and blocks.
//!
//! Documents and blocks live in two tables in a parent/child relation; blocks
//! are queried by parent and ordered by their caller-supplied position, with
//! SQLite's rowid supplying the stable insertion-order tie-break. The store
//! performs no position validation and no renumbering — ordering is by value,
//! not contiguity.

use std::path::Path;

use rusqlite::{params, Connection, Result as SqliteResult};

use scriv_types::{
    now_millis, Block, BlockDraft, BlockId, BlockKind, Document, DocumentId, DocumentSnapshot,
    Metadata,
};

use crate::error::{Result, StoreError};

/// Database handle for document/block persistence.
pub struct DocumentDb {
    conn: Connection,
}

const SCHEMA: &str = r#"
-- Document metadata
CREATE TABLE IF NOT EXISTS documents (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_documents_updated ON documents(updated_at DESC);

-- Blocks (flat per-document sequence, ordered by position)
CREATE TABLE IF NOT EXISTS blocks (
    id TEXT PRIMARY KEY,
    document_id TEXT NOT NULL,
    kind TEXT NOT NULL,
    content TEXT NOT NULL,
    position INTEGER NOT NULL,
    metadata TEXT NOT NULL DEFAULT '{}',
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL,
    FOREIGN KEY (document_id) REFERENCES documents(id) ON DELETE CASCADE
);
CREATE INDEX IF NOT EXISTS idx_blocks_order ON blocks(document_id, position);
"#;

// =============================================================================
// Row mapping
// =============================================================================

/// Convert a TEXT column back into a typed ID.
fn column_id<T, E>(idx: usize, raw: String, parse: fn(&str) -> std::result::Result<T, E>) -> SqliteResult<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    parse(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Map a row of the blocks table (full column list, in schema order).
fn block_from_row(row: &rusqlite::Row<'_>) -> SqliteResult<Block> {
    let kind_str: String = row.get(2)?;
    let metadata_str: String = row.get(5)?;
    Ok(Block {
        id: column_id(0, row.get(0)?, BlockId::parse)?,
        document_id: column_id(1, row.get(1)?, DocumentId::parse)?,
        kind: BlockKind::from_str(&kind_str).unwrap_or_default(),
        content: row.get(3)?,
        position: row.get(4)?,
        metadata: serde_json::from_str::<Metadata>(&metadata_str).unwrap_or_default(),
        created_at: row.get::<_, i64>(6)? as u64,
        updated_at: row.get::<_, i64>(7)? as u64,
    })
}

/// Map a row of the documents table.
fn document_from_row(row: &rusqlite::Row<'_>) -> SqliteResult<Document> {
    Ok(Document {
        id: column_id(0, row.get(0)?, DocumentId::parse)?,
        title: row.get(1)?,
        created_at: row.get::<_, i64>(2)? as u64,
        updated_at: row.get::<_, i64>(3)? as u64,
    })
}

/// Insert a block row. Takes a plain connection so it works inside a
/// transaction as well (Transaction derefs to Connection).
fn insert_block(conn: &Connection, block: &Block) -> SqliteResult<()> {
    conn.execute(
        "INSERT INTO blocks (id, document_id, kind, content, position, metadata, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            block.id.to_string(),
            block.document_id.to_string(),
            block.kind.as_str(),
            block.content,
            block.position,
            serde_json::to_string(&block.metadata).unwrap_or_else(|_| "{}".into()),
            block.created_at as i64,
            block.updated_at as i64,
        ],
    )?;
    Ok(())
}

impl DocumentDb {
    /// Open or create a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> SqliteResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Create an in-memory database (for testing).
    pub fn in_memory() -> SqliteResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    // =========================================================================
    // Document operations
    // =========================================================================

    /// Create a document together with its initial blocks in one transaction.
    ///
    /// Each draft becomes a block with a fresh ID under the new document;
    /// either the document and all blocks persist, or none do. Returns the
    /// snapshot with blocks in document order.
    pub fn create_document(&self, title: &str, drafts: Vec<BlockDraft>) -> Result<DocumentSnapshot> {
        let document = Document::new(title);

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO documents (id, title, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                document.id.to_string(),
                document.title,
                document.created_at as i64,
                document.updated_at as i64,
            ],
        )?;

        for draft in drafts {
            let block = Block::from_draft(document.id, draft);
            insert_block(&tx, &block)?;
        }
        tx.commit()?;

        self.document(document.id)
    }

    /// Load a document with its blocks sorted by position.
    pub fn document(&self, id: DocumentId) -> Result<DocumentSnapshot> {
        let meta = self
            .document_meta(id)?
            .ok_or(StoreError::DocumentNotFound(id))?;
        let blocks = self.blocks_ordered(id)?;
        Ok(DocumentSnapshot::new(meta, blocks))
    }

    /// List all document metadata rows, most recently updated first.
    pub fn documents(&self) -> Result<Vec<Document>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, created_at, updated_at
             FROM documents ORDER BY updated_at DESC, id",
        )?;
        let rows = stmt.query_map([], document_from_row)?;
        Ok(rows.collect::<SqliteResult<Vec<_>>>()?)
    }

    /// Load a document's metadata row, if it exists.
    fn document_meta(&self, id: DocumentId) -> Result<Option<Document>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, created_at, updated_at FROM documents WHERE id = ?1",
        )?;
        let mut rows = stmt.query(params![id.to_string()])?;
        match rows.next()? {
            Some(row) => Ok(Some(document_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Load a document's blocks sorted by position, rowid breaking ties.
    fn blocks_ordered(&self, document_id: DocumentId) -> Result<Vec<Block>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, document_id, kind, content, position, metadata, created_at, updated_at
             FROM blocks WHERE document_id = ?1 ORDER BY position, rowid",
        )?;
        let rows = stmt.query_map(params![document_id.to_string()], block_from_row)?;
        Ok(rows.collect::<SqliteResult<Vec<_>>>()?)
    }

    // =========================================================================
    // Block operations
    // =========================================================================

    /// Create a new block under an existing document.
    ///
    /// The position is taken as given: no collision check, no shifting of
    /// siblings. Fails with `DocumentNotFound` before anything is written.
    pub fn add_block(&self, document_id: DocumentId, draft: BlockDraft) -> Result<Block> {
        if self.document_meta(document_id)?.is_none() {
            return Err(StoreError::DocumentNotFound(document_id));
        }
        let block = Block::from_draft(document_id, draft);
        insert_block(&self.conn, &block)?;
        Ok(block)
    }

    /// Fetch a single block under the given document.
    pub fn block(&self, document_id: DocumentId, block_id: BlockId) -> Result<Block> {
        let mut stmt = self.conn.prepare(
            "SELECT id, document_id, kind, content, position, metadata, created_at, updated_at
             FROM blocks WHERE id = ?1 AND document_id = ?2",
        )?;
        let mut rows = stmt.query(params![block_id.to_string(), document_id.to_string()])?;
        match rows.next()? {
            Some(row) => Ok(block_from_row(row)?),
            None => Err(StoreError::BlockNotFound(block_id)),
        }
    }

    /// Full-replace update of a block's kind, content, position, and
    /// metadata; refreshes the block's `updated_at`.
    ///
    /// Fields are never defaulted here — the draft is the complete field set
    /// and the boundary is responsible for supplying all of it.
    pub fn update_block(
        &self,
        document_id: DocumentId,
        block_id: BlockId,
        draft: BlockDraft,
    ) -> Result<Block> {
        let updated_at = now_millis();
        let changed = self.conn.execute(
            "UPDATE blocks SET kind = ?1, content = ?2, position = ?3, metadata = ?4, updated_at = ?5
             WHERE id = ?6 AND document_id = ?7",
            params![
                draft.kind.as_str(),
                draft.content,
                draft.position,
                serde_json::to_string(&draft.metadata).unwrap_or_else(|_| "{}".into()),
                updated_at as i64,
                block_id.to_string(),
                document_id.to_string(),
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::BlockNotFound(block_id));
        }
        self.block(document_id, block_id)
    }

    /// Delete a block permanently. Sibling positions are left untouched;
    /// the resulting gap is fine under the ordering contract.
    pub fn delete_block(&self, document_id: DocumentId, block_id: BlockId) -> Result<()> {
        let changed = self.conn.execute(
            "DELETE FROM blocks WHERE id = ?1 AND document_id = ?2",
            params![block_id.to_string(), document_id.to_string()],
        )?;
        if changed == 0 {
            return Err(StoreError::BlockNotFound(block_id));
        }
        Ok(())
    }
}
