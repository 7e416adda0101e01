//! n8n workflow-webhook provider binding.
//!
//! The webhook receives the structured story context (not a rendered
//! prompt) and is expected to answer with a JSON object carrying the
//! generated chapter under `output` (the respond-to-webhook node default)
//! or `text`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::models::{GenerationConfig, N8nConfig, StoryContext};
use crate::domain::ports::{ProviderError, StoryProvider};

#[derive(Debug, Deserialize)]
struct WebhookResponse {
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

/// Workflow-webhook text-generation backend.
pub struct N8nProvider {
    client: Client,
    webhook_url: String,
}

impl N8nProvider {
    /// Build the provider; fails when no webhook URL is configured.
    pub fn new(config: N8nConfig, generation: GenerationConfig) -> Result<Self, ProviderError> {
        let webhook_url = config
            .webhook_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ProviderError::NotConfigured("n8n webhook URL missing".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(generation.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        Ok(Self {
            client,
            webhook_url,
        })
    }
}

#[async_trait]
impl StoryProvider for N8nProvider {
    fn name(&self) -> &'static str {
        "n8n"
    }

    async fn generate_story(&self, context: &StoryContext) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(context)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Http(format!("status {status}: {body}")));
        }

        let envelope: WebhookResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        envelope
            .output
            .or(envelope.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ProviderError::EmptyCompletion)
    }
}
