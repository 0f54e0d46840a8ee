//! Store failure → transport status translation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use scriv_store::StoreError;

/// Client-visible API failure.
///
/// Carries exactly the detail string the response body will show; the
/// store's typed errors are collapsed here because this is the outermost
/// layer that still distinguishes them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Document not found")]
    DocumentNotFound,

    #[error("Block not found")]
    BlockNotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DocumentNotFound(_) => ApiError::DocumentNotFound,
            StoreError::BlockNotFound(_) => ApiError::BlockNotFound,
            StoreError::Persistence(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::DocumentNotFound | ApiError::BlockNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiError::Internal(msg) => {
                tracing::error!("request failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
