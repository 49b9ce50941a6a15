//! Mock provider implementation for testing.

use super::{Completion, CompletionChoice, CompletionMessage, CompletionProvider, ProviderError};
use async_trait::async_trait;

enum MockBehavior {
    Reply(String),
    Empty,
    Fail,
}

/// Mock completion provider returning a canned outcome.
pub struct MockCompletionProvider {
    behavior: MockBehavior,
}

impl MockCompletionProvider {
    /// Provider whose first choice carries the given content.
    pub fn replying(content: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Reply(content.into()),
        }
    }

    /// Provider that returns a completion with zero choices.
    pub fn empty() -> Self {
        Self {
            behavior: MockBehavior::Empty,
        }
    }

    /// Provider whose call fails with a network error.
    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Fail,
        }
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, _prompt: &str) -> Result<Completion, ProviderError> {
        match &self.behavior {
            MockBehavior::Reply(content) => Ok(Completion {
                choices: vec![CompletionChoice {
                    message: CompletionMessage {
                        content: Some(content.clone()),
                    },
                }],
            }),
            MockBehavior::Empty => Ok(Completion { choices: vec![] }),
            MockBehavior::Fail => Err(ProviderError::NetworkError(
                "mock provider set to fail".to_string(),
            )),
        }
    }
}
