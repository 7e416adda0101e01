//! SQLite implementation of the FavoriteStoryRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{FavoriteStory, StoryKind};
use crate::domain::ports::FavoriteStoryRepository;

use super::{parse_datetime, parse_uuid};

#[derive(Clone)]
pub struct SqliteFavoriteStoryRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteStoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteStoryRepository for SqliteFavoriteStoryRepository {
    async fn insert(&self, story: &FavoriteStory) -> DomainResult<()> {
        sqlx::query(
            r#"INSERT INTO favorite_stories (id, user_id, title, kind, narrative_tag, created_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(story.id.to_string())
        .bind(story.user_id.to_string())
        .bind(&story.title)
        .bind(story.kind.as_str())
        .bind(&story.narrative_tag)
        .bind(story.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<FavoriteStory>> {
        let rows: Vec<FavoriteStoryRow> = sqlx::query_as(
            "SELECT id, user_id, title, kind, narrative_tag, created_at
             FROM favorite_stories WHERE user_id = ? ORDER BY created_at",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM favorite_stories WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::StoryNotFound(id));
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct FavoriteStoryRow {
    id: String,
    user_id: String,
    title: String,
    kind: String,
    narrative_tag: Option<String>,
    created_at: String,
}

impl TryFrom<FavoriteStoryRow> for FavoriteStory {
    type Error = DomainError;

    fn try_from(row: FavoriteStoryRow) -> Result<Self, Self::Error> {
        let kind = StoryKind::from_str(&row.kind)
            .ok_or_else(|| DomainError::Serialization(format!("unknown story kind: {}", row.kind)))?;

        Ok(FavoriteStory {
            id: parse_uuid(&row.id)?,
            user_id: parse_uuid(&row.user_id)?,
            title: row.title,
            kind,
            narrative_tag: row.narrative_tag,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}
