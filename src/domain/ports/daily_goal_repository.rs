//! Daily goal repository port.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::DailyGoal;

/// Repository interface for daily goals.
#[async_trait]
pub trait DailyGoalRepository: Send + Sync {
    /// Insert a new goal.
    async fn insert(&self, goal: &DailyGoal) -> DomainResult<()>;

    /// All goals a user set for a given day, in creation order.
    async fn list_for_date(&self, user_id: Uuid, date: NaiveDate) -> DomainResult<Vec<DailyGoal>>;

    /// Set the completion flag of a goal owned by the user.
    async fn set_completed(&self, user_id: Uuid, id: Uuid, completed: bool) -> DomainResult<()>;

    /// Delete a goal owned by the user.
    async fn delete(&self, user_id: Uuid, id: Uuid) -> DomainResult<()>;
}
