//! Document-level handlers: create, list, fetch.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use scriv_types::{BlockDraft, Document, DocumentId, DocumentSnapshot};

use crate::api::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateDocument {
    pub title: String,
    pub blocks: Vec<BlockDraft>,
}

/// `POST /block-documents` — create a document with its initial blocks in
/// one unit. Returns the aggregate with blocks in document order.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateDocument>,
) -> Result<Json<DocumentSnapshot>, ApiError> {
    let snapshot = state.documents.create_document(&req.title, req.blocks)?;
    Ok(Json(snapshot))
}

/// `GET /block-documents` — document metadata rows, newest-updated first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(state.documents.documents()?))
}

/// `GET /block-documents/{id}` — the aggregate, blocks sorted by position.
pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DocumentSnapshot>, ApiError> {
    let id = parse_document_id(&id)?;
    Ok(Json(state.documents.document(id)?))
}

/// Unknown and malformed identifiers are indistinguishable to a caller:
/// both are simply documents that don't exist.
pub(super) fn parse_document_id(raw: &str) -> Result<DocumentId, ApiError> {
    DocumentId::parse(raw).map_err(|_| ApiError::DocumentNotFound)
}
