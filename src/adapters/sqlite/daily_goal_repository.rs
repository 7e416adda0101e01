//! SQLite implementation of the DailyGoalRepository.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::DailyGoal;
use crate::domain::ports::DailyGoalRepository;

use super::{parse_date, parse_datetime, parse_uuid};

#[derive(Clone)]
pub struct SqliteDailyGoalRepository {
    pool: SqlitePool,
}

impl SqliteDailyGoalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DailyGoalRepository for SqliteDailyGoalRepository {
    async fn insert(&self, goal: &DailyGoal) -> DomainResult<()> {
        sqlx::query(
            r#"INSERT INTO daily_goals (id, user_id, date, goal_text, completed, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(goal.id.to_string())
        .bind(goal.user_id.to_string())
        .bind(goal.date.format("%Y-%m-%d").to_string())
        .bind(&goal.goal_text)
        .bind(goal.completed)
        .bind(goal.created_at.to_rfc3339())
        .bind(goal.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_date(&self, user_id: Uuid, date: NaiveDate) -> DomainResult<Vec<DailyGoal>> {
        let rows: Vec<DailyGoalRow> = sqlx::query_as(
            "SELECT id, user_id, date, goal_text, completed, created_at, updated_at
             FROM daily_goals WHERE user_id = ? AND date = ? ORDER BY created_at",
        )
        .bind(user_id.to_string())
        .bind(date.format("%Y-%m-%d").to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn set_completed(&self, user_id: Uuid, id: Uuid, completed: bool) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE daily_goals SET completed = ?, updated_at = ? WHERE id = ? AND user_id = ?",
        )
        .bind(completed)
        .bind(Utc::now().to_rfc3339())
        .bind(id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GoalNotFound(id));
        }

        Ok(())
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM daily_goals WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GoalNotFound(id));
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct DailyGoalRow {
    id: String,
    user_id: String,
    date: String,
    goal_text: String,
    completed: bool,
    created_at: String,
    updated_at: String,
}

impl TryFrom<DailyGoalRow> for DailyGoal {
    type Error = DomainError;

    fn try_from(row: DailyGoalRow) -> Result<Self, Self::Error> {
        Ok(DailyGoal {
            id: parse_uuid(&row.id)?,
            user_id: parse_uuid(&row.user_id)?,
            date: parse_date(&row.date)?,
            goal_text: row.goal_text,
            completed: row.completed,
            created_at: parse_datetime(&row.created_at)?,
            updated_at: parse_datetime(&row.updated_at)?,
        })
    }
}
