//! Provider chain.
//!
//! The chain owns the ordered list of enrolled text-generation providers
//! plus the deterministic fallback generator, and guarantees that
//! generation never fails outward: any provider error is logged and
//! absorbed by falling through to the fallback.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::models::StoryContext;
use crate::domain::ports::StoryProvider;

use super::fallback::FallbackGenerator;

/// Ordered text-generation backends with local fallback.
///
/// Explicitly constructed and passed to callers; tests inject mock
/// providers through `new`.
pub struct ProviderChain {
    providers: Vec<Arc<dyn StoryProvider>>,
    current: AtomicUsize,
    fallback: FallbackGenerator,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn StoryProvider>>) -> Self {
        Self {
            providers,
            current: AtomicUsize::new(0),
            fallback: FallbackGenerator::new(),
        }
    }

    /// Names of every enrolled provider, in chain order.
    pub fn available_providers(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Select the provider to attempt by name. Returns false when no
    /// enrolled provider carries that name.
    pub fn set_provider(&self, name: &str) -> bool {
        match self.providers.iter().position(|p| p.name() == name) {
            Some(index) => {
                self.current.store(index, Ordering::SeqCst);
                true
            }
            None => false,
        }
    }

    /// Generate the next chapter's prose. Never fails: with no enrolled
    /// provider the fallback runs directly with no network attempt, and a
    /// failing provider falls through to the fallback.
    pub async fn generate(&self, context: &StoryContext) -> String {
        let Some(provider) = self.providers.get(self.current.load(Ordering::SeqCst)) else {
            debug!("no provider enrolled, using fallback generator");
            return self.fallback.generate(context);
        };

        match provider.generate_story(context).await {
            Ok(text) => {
                debug!(provider = provider.name(), "provider generated chapter");
                text
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "provider failed, using fallback generator");
                self.fallback.generate(context)
            }
        }
    }
}
