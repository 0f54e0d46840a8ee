//! LLM provider abstraction for the text-generation helper.
//!
//! This system needs exactly one capability: prompt in, generated text out.
//! The trait still models the completion request in full so a second
//! provider can slot in without touching the handler.

mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Human/user message.
    User,
    /// Assistant/model message.
    Assistant,
}

/// A message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Who sent this message.
    pub role: Role,
    /// Message content.
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// System prompt used by the writing-assistant call.
pub const WRITING_ASSISTANT_PROMPT: &str = "You are a helpful writing assistant.";

/// Configuration for a completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Conversation history.
    pub messages: Vec<Message>,
    /// System prompt (provider-specific handling).
    pub system: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Temperature (0.0 = deterministic, 1.0 = creative).
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    /// Create a new completion request.
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            messages,
            system: None,
            model: model.into(),
            max_tokens: 4096,
            temperature: None,
        }
    }

    /// The single-shot writing-assistant request the generate route sends.
    pub fn writing_assistant(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(prompt)],
            system: Some(WRITING_ASSISTANT_PROMPT.to_string()),
            model: model.into(),
            max_tokens: 1000,
            temperature: Some(0.7),
        }
    }

    /// Set the system prompt.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Response from an LLM completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated text content.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
}

/// Error type for LLM operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Provider not configured or unavailable.
    #[error("provider not available: {0}")]
    Unavailable(String),

    /// The API rejected or failed the request.
    #[error("api error: {0}")]
    ApiError(String),

    /// Network error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Result type for LLM operations.
pub type LlmResult<T> = Result<T, LlmError>;

/// Trait for LLM providers.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// The model used when the caller doesn't pick one.
    fn default_model(&self) -> &str;

    /// Send a completion request.
    async fn complete(&self, request: CompletionRequest) -> LlmResult<CompletionResponse>;

    /// Single-prompt helper — the writing-assistant call against the
    /// default model.
    async fn generate(&self, prompt: &str) -> LlmResult<CompletionResponse> {
        self.complete(CompletionRequest::writing_assistant(
            self.default_model(),
            prompt,
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let user = Message::user("hello");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "hello");

        let assistant = Message::assistant("hi");
        assert_eq!(assistant.role, Role::Assistant);
    }

    #[test]
    fn test_writing_assistant_request_parameters() {
        let req = CompletionRequest::writing_assistant("gpt-3.5-turbo", "continue this story");
        assert_eq!(req.model, "gpt-3.5-turbo");
        assert_eq!(req.system.as_deref(), Some(WRITING_ASSISTANT_PROMPT));
        assert_eq!(req.max_tokens, 1000);
        assert_eq!(req.temperature, Some(0.7));
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, Role::User);
    }

    #[test]
    fn test_request_builders() {
        let req = CompletionRequest::new("m", vec![])
            .with_system("sys")
            .with_max_tokens(10)
            .with_temperature(0.2);
        assert_eq!(req.system.as_deref(), Some("sys"));
        assert_eq!(req.max_tokens, 10);
        assert_eq!(req.temperature, Some(0.2));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
