//! Aggregated per-user statistics.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only aggregate over a user's goals and chapters.
///
/// Mirrors the dashboard statistics view: lifetime totals, the completion
/// percentage, and the count of days per impact category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStatistics {
    pub user_id: Uuid,
    pub total_goals_set: u64,
    pub total_goals_completed: u64,
    /// Completed / set, as a percentage. 0.0 when no goals were ever set.
    pub completion_percentage: f64,
    pub days_with_goals: u64,
    pub story_entries: u64,
    pub positive_days: u64,
    pub negative_days: u64,
    pub extra_reward_days: u64,
    pub severe_penalty_days: u64,
}
