//! SQLite adapters for the persistence ports.
//!
//! The hosted persistence API of the original deployment is modeled here as
//! a local SQLite database behind the same row-level operations: reads,
//! inserts, updates, deletes and the one upsert that keeps chapters unique
//! per user and day.

pub mod chapter_repository;
pub mod connection;
pub mod daily_goal_repository;
pub mod favorite_story_repository;
pub mod migrations;
pub mod statistics_repository;

pub use chapter_repository::SqliteChapterRepository;
pub use connection::{create_pool, create_test_pool, verify_connection, ConnectionError, PoolConfig};
pub use daily_goal_repository::SqliteDailyGoalRepository;
pub use favorite_story_repository::SqliteFavoriteStoryRepository;
pub use migrations::{all_embedded_migrations, Migration, MigrationError, Migrator};
pub use statistics_repository::SqliteStatisticsRepository;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

/// Parse a UUID string from a SQLite row field.
pub(crate) fn parse_uuid(s: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(s).map_err(|e| DomainError::Serialization(e.to_string()))
}

/// Parse an RFC3339 datetime string from a SQLite row field.
pub(crate) fn parse_datetime(s: &str) -> DomainResult<DateTime<Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| DomainError::Serialization(e.to_string()))
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse an ISO-8601 calendar day from a SQLite row field.
pub(crate) fn parse_date(s: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DomainError::Serialization(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),
    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),
    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),
}

/// Open (creating if missing) and migrate the database named by `config`.
pub async fn initialize_database(
    config: &crate::domain::models::DatabaseConfig,
) -> Result<SqlitePool, DatabaseError> {
    let pool = create_pool(config).await?;
    let migrator = Migrator::new(pool.clone());
    migrator
        .run_embedded_migrations(all_embedded_migrations())
        .await?;
    Ok(pool)
}
