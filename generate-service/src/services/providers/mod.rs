//! Text generation provider abstraction.
//!
//! Gemini is the only production backend; the trait exists so handlers can be
//! exercised against [`mock::MockTextProvider`].

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::GenerationCall;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited by provider")]
    RateLimited,

    #[error("Prompt blocked by provider: {0}")]
    Blocked(String),

    #[error("Content filtered by provider safety settings")]
    ContentFiltered,

    #[error("Provider returned no text")]
    EmptyResponse,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Issue exactly one generation request and return the generated text.
    async fn generate(&self, call: &GenerationCall) -> Result<String, ProviderError>;

    /// Report whether the provider is usable. Must not consume quota.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
