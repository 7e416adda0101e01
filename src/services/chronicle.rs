//! Chronicle service: the end-to-end daily chapter flow.
//!
//! Context build, generation and the persistence upsert run sequentially;
//! nothing is written when the context cannot be assembled, and a failed
//! write surfaces to the caller untouched by retries. Two concurrent
//! triggers for the same user and day race on the upsert and the later
//! write wins.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Chapter, UserAccount};
use crate::domain::ports::ChapterRepository;

use super::context_builder::ContextBuilder;
use super::generation::ProviderChain;

pub struct ChronicleService {
    context_builder: ContextBuilder,
    chain: Arc<ProviderChain>,
    chapters: Arc<dyn ChapterRepository>,
}

impl ChronicleService {
    pub fn new(
        context_builder: ContextBuilder,
        chain: Arc<ProviderChain>,
        chapters: Arc<dyn ChapterRepository>,
    ) -> Self {
        Self {
            context_builder,
            chain,
            chapters,
        }
    }

    /// Generate and persist the chapter for `today`.
    ///
    /// A non-empty `custom_summary` bypasses the provider chain and the
    /// fallback generator entirely: the text is persisted verbatim
    /// (trimmed), while the impact still reflects the day's actual
    /// goal-completion ratio.
    pub async fn write_daily_chapter(
        &self,
        user: &UserAccount,
        today: NaiveDate,
        custom_summary: Option<&str>,
    ) -> DomainResult<Chapter> {
        let context = self.context_builder.build(user, today).await?;

        let summary = match custom_summary.map(str::trim).filter(|s| !s.is_empty()) {
            Some(custom) => custom.to_string(),
            None => self.chain.generate(&context).await,
        };

        let chapter = Chapter::new(user.id, today, summary, context.today.impact);
        self.chapters.upsert(&chapter).await?;

        info!(
            user_id = %user.id,
            date = %today,
            impact = chapter.impact.as_str(),
            "daily chapter written"
        );

        Ok(chapter)
    }
}
