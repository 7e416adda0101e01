//! Chapter repository port.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::Chapter;

/// Repository interface for story chapters.
#[async_trait]
pub trait ChapterRepository: Send + Sync {
    /// Insert-or-replace keyed on (user_id, date).
    ///
    /// Safe to call twice for the same day: the later write wins in full
    /// (summary and impact), which is what limits a user to exactly one
    /// chapter per day no matter how often generation is triggered.
    async fn upsert(&self, chapter: &Chapter) -> DomainResult<()>;

    /// The chapter for a specific day, if one was written.
    async fn get_for_date(&self, user_id: Uuid, date: NaiveDate) -> DomainResult<Option<Chapter>>;

    /// Up to `limit` chapters strictly before `date`, newest first.
    async fn list_recent_before(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        limit: u32,
    ) -> DomainResult<Vec<Chapter>>;

    /// Full history for a user, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<Chapter>>;
}
