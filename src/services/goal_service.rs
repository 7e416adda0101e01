//! Daily goal service.
//!
//! Thin business layer over the goal repository: input validation happens
//! here, before any I/O.

use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::DailyGoal;
use crate::domain::ports::DailyGoalRepository;

pub struct GoalService {
    repository: Arc<dyn DailyGoalRepository>,
}

impl GoalService {
    pub fn new(repository: Arc<dyn DailyGoalRepository>) -> Self {
        Self { repository }
    }

    /// Record a new goal for the day. Empty goal text is rejected before
    /// any write.
    pub async fn add_goal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        goal_text: &str,
    ) -> DomainResult<DailyGoal> {
        let goal = DailyGoal::new(user_id, date, goal_text.trim());
        goal.validate().map_err(DomainError::ValidationFailed)?;
        self.repository.insert(&goal).await?;
        Ok(goal)
    }

    /// All goals for the day, in creation order.
    pub async fn goals_for_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<DailyGoal>> {
        self.repository.list_for_date(user_id, date).await
    }

    /// Mark a goal (un)completed.
    pub async fn set_completed(
        &self,
        user_id: Uuid,
        goal_id: Uuid,
        completed: bool,
    ) -> DomainResult<()> {
        self.repository.set_completed(user_id, goal_id, completed).await
    }

    /// Remove a goal.
    pub async fn remove_goal(&self, user_id: Uuid, goal_id: Uuid) -> DomainResult<()> {
        self.repository.delete(user_id, goal_id).await
    }
}
