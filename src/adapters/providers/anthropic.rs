//! Anthropic messages-API provider binding.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::models::{AnthropicConfig, GenerationConfig, StoryContext};
use crate::domain::ports::{ProviderError, StoryProvider};
use crate::services::prompt;

/// Messages-API request body.
#[derive(Debug, Serialize)]
struct MessageRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Messages-API response envelope; only the fields we read.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Anthropic-style text-generation backend.
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    api_version: String,
    generation: GenerationConfig,
}

impl AnthropicProvider {
    /// Build the provider; fails when no API key is configured.
    pub fn new(
        config: AnthropicConfig,
        generation: GenerationConfig,
    ) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::NotConfigured("Anthropic API key missing".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(generation.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            model: config.model,
            base_url: config.base_url,
            api_version: config.api_version,
            generation,
        })
    }
}

#[async_trait]
impl StoryProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn generate_story(&self, context: &StoryContext) -> Result<String, ProviderError> {
        let request = MessageRequest {
            model: self.model.clone(),
            max_tokens: self.generation.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt::render(context),
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Http(format!("status {status}: {body}")));
        }

        let envelope: MessageResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        envelope
            .content
            .into_iter()
            .find_map(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ProviderError::EmptyCompletion)
    }
}
