//! Story provider port - interface for text-generation backends.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::StoryContext;

/// Errors a provider binding can surface.
///
/// These never escape the provider chain: any of them routes generation to
/// the deterministic fallback generator.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Unexpected response envelope: {0}")]
    InvalidResponse(String),

    #[error("Provider returned an empty completion")]
    EmptyCompletion,

    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Http(err.to_string())
        }
    }
}

/// Trait for text-generation backends.
///
/// Each backend adapts the shared story context to its own wire format and
/// response envelope. A provider that never responds is equivalent to one
/// that errors, as far as the chain's fallback contract is concerned.
#[async_trait]
pub trait StoryProvider: Send + Sync {
    /// Human-readable provider name, used for selection and logging.
    fn name(&self) -> &'static str;

    /// Generate the next chapter's prose from the given context.
    async fn generate_story(&self, context: &StoryContext) -> Result<String, ProviderError>;
}
