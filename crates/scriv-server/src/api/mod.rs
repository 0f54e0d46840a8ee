//! API router assembly.

use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

mod error;
mod handlers;
mod v1;

pub use error::ApiError;

/// Build the full application router.
pub fn configure(state: AppState) -> Router {
    // Wide-open CORS: the service fronts a local editor frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", v1::configure(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Service banner.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "scriv block-document service" }))
}
