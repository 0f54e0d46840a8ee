//! v1 route table — one route per logical store call, plus the AI helper.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn configure(state: AppState) -> Router {
    Router::new()
        .route(
            "/block-documents",
            post(handlers::documents::create).get(handlers::documents::list),
        )
        .route("/block-documents/{id}", get(handlers::documents::fetch))
        .route(
            "/block-documents/{id}/blocks",
            post(handlers::blocks::add),
        )
        .route(
            "/block-documents/{id}/blocks/{block_id}",
            put(handlers::blocks::update).delete(handlers::blocks::remove),
        )
        .route("/ai/generate", post(handlers::generate::generate))
        .with_state(state)
}
