//! SQLite implementation of the ChapterRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Chapter, ImpactType};
use crate::domain::ports::ChapterRepository;

use super::{parse_date, parse_datetime, parse_uuid};

#[derive(Clone)]
pub struct SqliteChapterRepository {
    pool: SqlitePool,
}

impl SqliteChapterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChapterRepository for SqliteChapterRepository {
    async fn upsert(&self, chapter: &Chapter) -> DomainResult<()> {
        // Last write wins in full: two same-day generations race and the
        // later one replaces summary, impact and timestamp.
        sqlx::query(
            r#"INSERT INTO story_progress (id, user_id, date, summary, impact_type, created_at)
               VALUES (?, ?, ?, ?, ?, ?)
               ON CONFLICT (user_id, date) DO UPDATE SET
                   summary = excluded.summary,
                   impact_type = excluded.impact_type,
                   created_at = excluded.created_at"#,
        )
        .bind(chapter.id.to_string())
        .bind(chapter.user_id.to_string())
        .bind(chapter.date.format("%Y-%m-%d").to_string())
        .bind(&chapter.summary)
        .bind(chapter.impact.as_str())
        .bind(chapter.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_for_date(&self, user_id: Uuid, date: NaiveDate) -> DomainResult<Option<Chapter>> {
        let row: Option<ChapterRow> = sqlx::query_as(
            "SELECT id, user_id, date, summary, impact_type, created_at
             FROM story_progress WHERE user_id = ? AND date = ?",
        )
        .bind(user_id.to_string())
        .bind(date.format("%Y-%m-%d").to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list_recent_before(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        limit: u32,
    ) -> DomainResult<Vec<Chapter>> {
        let rows: Vec<ChapterRow> = sqlx::query_as(
            "SELECT id, user_id, date, summary, impact_type, created_at
             FROM story_progress WHERE user_id = ? AND date < ?
             ORDER BY date DESC LIMIT ?",
        )
        .bind(user_id.to_string())
        .bind(date.format("%Y-%m-%d").to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<Chapter>> {
        let rows: Vec<ChapterRow> = sqlx::query_as(
            "SELECT id, user_id, date, summary, impact_type, created_at
             FROM story_progress WHERE user_id = ? ORDER BY date DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

#[derive(sqlx::FromRow)]
struct ChapterRow {
    id: String,
    user_id: String,
    date: String,
    summary: String,
    impact_type: String,
    created_at: String,
}

impl TryFrom<ChapterRow> for Chapter {
    type Error = DomainError;

    fn try_from(row: ChapterRow) -> Result<Self, Self::Error> {
        let impact = ImpactType::from_str(&row.impact_type).ok_or_else(|| {
            DomainError::Serialization(format!("unknown impact type: {}", row.impact_type))
        })?;

        Ok(Chapter {
            id: parse_uuid(&row.id)?,
            user_id: parse_uuid(&row.user_id)?,
            date: parse_date(&row.date)?,
            summary: row.summary,
            impact,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}
