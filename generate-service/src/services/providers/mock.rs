//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use crate::models::GenerationCall;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Behavior {
    Reply(String),
    Echo,
    Fail(String),
    Unconfigured,
}

/// Mock text provider for testing.
///
/// Records every call it receives so tests can assert on the resolved
/// parameters and on how many outbound calls a request produced.
pub struct MockTextProvider {
    behavior: Behavior,
    calls: Mutex<Vec<GenerationCall>>,
}

impl MockTextProvider {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(text.into()))
    }

    /// Answer with the composed message it was sent.
    pub fn echoing() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    /// Always fail with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Fail(message.into()))
    }

    /// Behave like a provider with no credentials.
    pub fn unconfigured() -> Self {
        Self::with_behavior(Behavior::Unconfigured)
    }

    pub fn calls(&self) -> Vec<GenerationCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, call: &GenerationCall) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call.clone());

        // Yield so concurrent requests interleave.
        tokio::task::yield_now().await;

        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Echo => Ok(call.message.clone()),
            Behavior::Fail(message) => Err(ProviderError::ApiError(message.clone())),
            Behavior::Unconfigured => Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match self.behavior {
            Behavior::Unconfigured => Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
