//! HTTP boundary for the scriv block-document store.
//!
//! Translates request payloads into aggregate-service calls and store
//! results into response payloads; maps the store's typed failures onto
//! transport statuses. The AI text-generation helper rides along as a
//! sibling capability with no coupling to the block model.

use std::sync::Arc;

use scriv_store::DocumentService;

use crate::llm::LlmProvider;

pub mod api;
pub mod llm;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The document aggregate service.
    pub documents: DocumentService,
    /// Text-generation provider; `None` when no credentials are configured,
    /// in which case the generate route reports failure as data.
    pub llm: Option<Arc<dyn LlmProvider>>,
}

impl AppState {
    /// State with documents only — the AI route will report itself
    /// unconfigured.
    pub fn without_llm(documents: DocumentService) -> Self {
        Self {
            documents,
            llm: None,
        }
    }
}
