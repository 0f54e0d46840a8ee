//! Error types for store operations.

use thiserror::Error;

use scriv_types::{BlockId, DocumentId};

/// Errors that can occur during store operations.
///
/// Every precondition violation raises a typed failure; the store never
/// returns partial or default-substituted data. Persistence failures are
/// surfaced as-is and never retried here — partial-state prevention is the
/// transaction boundary's job.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Referenced document does not exist.
    #[error("document not found: {0}")]
    DocumentNotFound(DocumentId),

    /// Referenced block does not exist under the given document.
    #[error("block not found: {0}")]
    BlockNotFound(BlockId),

    /// The storage collaborator could not complete the operation.
    #[error("persistence error: {0}")]
    Persistence(#[from] rusqlite::Error),
}

impl StoreError {
    /// Check if this is either not-found variant.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::DocumentNotFound(_) | StoreError::BlockNotFound(_)
        )
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(StoreError::DocumentNotFound(DocumentId::nil()).is_not_found());
        assert!(StoreError::BlockNotFound(BlockId::nil()).is_not_found());
        assert!(!StoreError::Persistence(rusqlite::Error::InvalidQuery).is_not_found());
    }

    #[test]
    fn test_display_names_the_id() {
        let id = DocumentId::new();
        let msg = StoreError::DocumentNotFound(id).to_string();
        assert!(msg.contains(&id.to_string()));
    }
}
