//! Shared identifier and block types for scriv.
//!
//! This crate is the data-model foundation: typed IDs, the block kind
//! enumeration, block and document records. It has **no internal scriv
//! dependencies** — a pure leaf crate that the store and server build on.
//!
//! # Entity-Relationship Overview
//!
//! ```text
//! Document (DocumentId)
//!     └── title + created_at/updated_at
//!     └── owns an ordered sequence of Blocks
//!
//! Block (BlockId)
//!     └── document_id back-reference (lookup key, not ownership)
//!     └── kind (paragraph, heading, list_item, code, quote)
//!     └── content (opaque text payload)
//!     └── position (caller-supplied integer ordering key)
//!     └── metadata (open JSON object, opaque to the store)
//! ```
//!
//! The externally observed block sequence of a document is always sorted
//! ascending by position, with insertion order breaking ties.

pub mod block;
pub mod document;
pub mod ids;

// Re-export primary types at crate root for convenience.
pub use block::{Block, BlockDraft, BlockKind, Metadata};
pub use document::{Document, DocumentSnapshot};
pub use ids::{BlockId, DocumentId};

/// Current time as Unix milliseconds. Used by constructors throughout the crate.
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
