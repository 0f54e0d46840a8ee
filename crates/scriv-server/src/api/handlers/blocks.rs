//! Block-level handlers: add, update, delete.

use axum::extract::{Path, State};
use axum::Json;

use scriv_types::{Block, BlockDraft, BlockId};

use crate::api::ApiError;
use crate::AppState;

use super::documents::parse_document_id;

/// `POST /block-documents/{id}/blocks` — add one block. The position in the
/// draft is an ordering hint, taken as given.
pub async fn add(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<BlockDraft>,
) -> Result<Json<Block>, ApiError> {
    let document_id = parse_document_id(&id)?;
    Ok(Json(state.documents.add_block(document_id, draft)?))
}

/// `PUT /block-documents/{id}/blocks/{block_id}` — full-replace update over
/// the complete draft field set.
pub async fn update(
    State(state): State<AppState>,
    Path((id, block_id)): Path<(String, String)>,
    Json(draft): Json<BlockDraft>,
) -> Result<Json<Block>, ApiError> {
    let document_id = parse_document_id(&id)?;
    let block_id = parse_block_id(&block_id)?;
    Ok(Json(state.documents.update_block(document_id, block_id, draft)?))
}

/// `DELETE /block-documents/{id}/blocks/{block_id}` — permanent removal,
/// confirmed with a message body.
pub async fn remove(
    State(state): State<AppState>,
    Path((id, block_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let document_id = parse_document_id(&id)?;
    let block_id = parse_block_id(&block_id)?;
    state.documents.delete_block(document_id, block_id)?;
    Ok(Json(serde_json::json!({ "message": "Block deleted" })))
}

fn parse_block_id(raw: &str) -> Result<BlockId, ApiError> {
    BlockId::parse(raw).map_err(|_| ApiError::BlockNotFound)
}
