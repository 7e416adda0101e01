//! Mock provider for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::domain::models::StoryContext;
use crate::domain::ports::{ProviderError, StoryProvider};

/// Scripted provider used to exercise the chain without a network.
pub struct MockProvider {
    name: &'static str,
    output: Option<String>,
    calls: AtomicU32,
}

impl MockProvider {
    /// A provider that always answers with `output`.
    pub fn succeeding(output: impl Into<String>) -> Self {
        Self::succeeding_named("mock", output)
    }

    /// Like `succeeding`, but enrolled under a distinct name so tests can
    /// select between several mocks.
    pub fn succeeding_named(name: &'static str, output: impl Into<String>) -> Self {
        Self {
            name,
            output: Some(output.into()),
            calls: AtomicU32::new(0),
        }
    }

    /// A provider that always errors.
    pub fn failing() -> Self {
        Self {
            name: "mock",
            output: None,
            calls: AtomicU32::new(0),
        }
    }

    /// How many times `generate_story` was invoked.
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoryProvider for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn generate_story(&self, _context: &StoryContext) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.output {
            Some(text) => Ok(text.clone()),
            None => Err(ProviderError::Http("mock provider failure".to_string())),
        }
    }
}
