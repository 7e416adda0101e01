//! Provider enrollment from configuration.
//!
//! Builds the ordered provider list the generation chain runs against.
//! Enrollment order is fixed (OpenAI, Anthropic, n8n webhook); a backend
//! enrolls only when its key or URL is configured, so an unconfigured
//! deployment yields an empty list and every chapter comes from the
//! deterministic fallback generator.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::Config;
use crate::domain::ports::StoryProvider;
use crate::services::generation::ProviderChain;

use super::anthropic::AnthropicProvider;
use super::n8n::N8nProvider;
use super::openai::OpenAiProvider;

/// Instantiate every configured provider, in chain order.
pub fn enrolled_providers(config: &Config) -> Vec<Arc<dyn StoryProvider>> {
    let mut providers: Vec<Arc<dyn StoryProvider>> = Vec::new();

    if config.providers.openai.api_key.is_some() {
        match OpenAiProvider::new(config.providers.openai.clone(), config.generation.clone()) {
            Ok(provider) => providers.push(Arc::new(provider)),
            Err(e) => warn!(error = %e, "failed to initialize openai provider"),
        }
    }

    if config.providers.anthropic.api_key.is_some() {
        match AnthropicProvider::new(config.providers.anthropic.clone(), config.generation.clone())
        {
            Ok(provider) => providers.push(Arc::new(provider)),
            Err(e) => warn!(error = %e, "failed to initialize anthropic provider"),
        }
    }

    if config.providers.n8n.webhook_url.is_some() {
        match N8nProvider::new(config.providers.n8n.clone(), config.generation.clone()) {
            Ok(provider) => providers.push(Arc::new(provider)),
            Err(e) => warn!(error = %e, "failed to initialize n8n provider"),
        }
    }

    providers
}

/// Build the full generation chain from configuration.
pub fn chain_from_config(config: &Config) -> ProviderChain {
    let providers = enrolled_providers(config);
    info!(
        providers = ?providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
        "provider chain initialized"
    );
    ProviderChain::new(providers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Config;

    #[test]
    fn empty_config_enrolls_nothing() {
        let config = Config::default();
        assert!(enrolled_providers(&config).is_empty());
    }

    #[test]
    fn configured_keys_enroll_in_fixed_order() {
        let mut config = Config::default();
        config.providers.anthropic.api_key = Some("key-a".to_string());
        config.providers.openai.api_key = Some("key-o".to_string());
        config.providers.n8n.webhook_url = Some("https://example.test/hook".to_string());

        let providers = enrolled_providers(&config);
        let names: Vec<_> = providers.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["openai", "anthropic", "n8n"]);
    }

    #[test]
    fn blank_key_is_not_enrolled() {
        let mut config = Config::default();
        config.providers.openai.api_key = Some("   ".to_string());

        assert!(enrolled_providers(&config).is_empty());
    }
}
