//! Completion provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction over chat-completion
//! backends, allowing easy swapping between the real OpenAI client and a
//! canned mock in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

/// A single message in a chat-completion conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// One candidate completion returned by the upstream service.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

/// The message payload of a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

/// Result of a completion call.
#[derive(Debug, Clone, Deserialize)]
pub struct Completion {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

impl Completion {
    /// Content of the first choice, if the upstream returned any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// Trait for chat-completion providers (e.g., OpenAI).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run a single user prompt through the model and return the raw result.
    async fn complete(&self, prompt: &str) -> Result<Completion, ProviderError>;
}
