//! Feedback webhook client.
//!
//! Fire-and-forget POST of free-text feedback to a configured workflow
//! webhook. A failed submission surfaces as a generic webhook error and is
//! never retried.

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{FeedbackConfig, UserAccount};

/// Payload field names follow what the receiving workflow expects.
#[derive(Debug, Serialize)]
struct FeedbackPayload<'a> {
    #[serde(rename = "Feedback")]
    feedback: &'a str,
    #[serde(rename = "userEmail")]
    user_email: &'a str,
    #[serde(rename = "leadId")]
    lead_id: String,
}

pub struct FeedbackClient {
    client: Client,
    webhook_url: Option<String>,
}

impl FeedbackClient {
    pub fn new(config: FeedbackConfig) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DomainError::Webhook(e.to_string()))?;

        Ok(Self {
            client,
            webhook_url: config.webhook_url,
        })
    }

    /// Submit free-text feedback on behalf of `user`.
    ///
    /// Empty feedback is rejected before any network call.
    pub async fn submit(&self, user: &UserAccount, feedback: &str) -> DomainResult<()> {
        let feedback = feedback.trim();
        if feedback.is_empty() {
            return Err(DomainError::ValidationFailed(
                "feedback cannot be empty".to_string(),
            ));
        }

        let Some(url) = &self.webhook_url else {
            return Err(DomainError::Webhook(
                "feedback webhook not configured".to_string(),
            ));
        };

        let payload = FeedbackPayload {
            feedback,
            user_email: user.email.as_deref().unwrap_or("nao_informado@exemplo.com"),
            lead_id: user.id.to_string(),
        };

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::Webhook(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::Webhook(format!(
                "feedback webhook answered {}",
                response.status()
            )));
        }

        info!(user_id = %user.id, "feedback submitted");
        Ok(())
    }
}
