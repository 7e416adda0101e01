//! Daily goal domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single goal a user set for a calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyGoal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub goal_text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyGoal {
    pub fn new(user_id: Uuid, date: NaiveDate, goal_text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            goal_text: goal_text.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Goal text must be non-empty after trimming; enforced before any I/O.
    pub fn validate(&self) -> Result<(), String> {
        if self.goal_text.trim().is_empty() {
            return Err("goal text cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_goal_starts_incomplete() {
        let goal = DailyGoal::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            "read 20 pages",
        );
        assert!(!goal.completed);
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn blank_goal_text_fails_validation() {
        let goal = DailyGoal::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            "   ",
        );
        assert!(goal.validate().is_err());
    }
}
