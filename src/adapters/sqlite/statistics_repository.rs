//! SQLite implementation of the StatisticsRepository.
//!
//! The original deployment exposed these numbers as a database view; here
//! the same aggregate is computed with two queries over the goal and
//! chapter tables.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ImpactType, UserStatistics};
use crate::domain::ports::StatisticsRepository;

#[derive(Clone)]
pub struct SqliteStatisticsRepository {
    pool: SqlitePool,
}

impl SqliteStatisticsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatisticsRepository for SqliteStatisticsRepository {
    async fn summary(&self, user_id: Uuid) -> DomainResult<UserStatistics> {
        let (total_set, total_completed, days_with_goals): (i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*),
                    COALESCE(SUM(completed), 0),
                    COUNT(DISTINCT date)
             FROM daily_goals WHERE user_id = ?",
        )
        .bind(user_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        let impact_rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT impact_type, COUNT(*) FROM story_progress
             WHERE user_id = ? GROUP BY impact_type",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        let mut stats = UserStatistics {
            user_id,
            total_goals_set: total_set.max(0) as u64,
            total_goals_completed: total_completed.max(0) as u64,
            days_with_goals: days_with_goals.max(0) as u64,
            ..UserStatistics::default()
        };

        if stats.total_goals_set > 0 {
            stats.completion_percentage =
                stats.total_goals_completed as f64 / stats.total_goals_set as f64 * 100.0;
        }

        for (impact_str, count) in impact_rows {
            let count = count.max(0) as u64;
            stats.story_entries += count;
            match ImpactType::from_str(&impact_str) {
                Some(ImpactType::Positive) => stats.positive_days = count,
                Some(ImpactType::Negative) => stats.negative_days = count,
                Some(ImpactType::ExtraReward) => stats.extra_reward_days = count,
                Some(ImpactType::SeverePenalty) => stats.severe_penalty_days = count,
                // Unknown rows are counted as entries but not categorized.
                None => {}
            }
        }

        Ok(stats)
    }
}
