//! Statistics repository port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::UserStatistics;

/// Read-only aggregated statistics, keyed by user.
#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    /// Lifetime totals, completion percentage and per-impact day counts.
    async fn summary(&self, user_id: Uuid) -> DomainResult<UserStatistics>;
}
