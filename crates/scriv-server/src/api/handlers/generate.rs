//! AI text-generation handler.
//!
//! Stateless prompt-in/text-out; failures are reported as data
//! (`success: false`) rather than transport errors, so an editor frontend
//! can surface them inline.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    fn ok(text: String, model: String) -> Self {
        Self {
            success: true,
            text: Some(text),
            model: Some(model),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            text: None,
            model: None,
            error: Some(message.into()),
        }
    }
}

/// `POST /ai/generate`.
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    let Some(provider) = state.llm.clone() else {
        return Json(GenerateResponse::err(
            "text generation is not configured (OPENAI_API_KEY is unset)",
        ));
    };

    debug!(chars = req.prompt.len(), "generating text");

    match provider.generate(&req.prompt).await {
        Ok(completion) => Json(GenerateResponse::ok(completion.content, completion.model)),
        Err(e) => {
            warn!("text generation failed: {e}");
            Json(GenerateResponse::err(e.to_string()))
        }
    }
}
