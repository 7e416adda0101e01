//! Domain errors for the storycraft core.

use thiserror::Error;
use uuid::Uuid;

/// Domain-level errors.
///
/// Provider failures are deliberately absent: they are absorbed inside the
/// provider chain and never cross the service boundary.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Reads backing the story context failed. Generation aborts rather
    /// than fabricating a chapter from an empty context.
    #[error("Story context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Daily goal not found: {0}")]
    GoalNotFound(Uuid),

    #[error("Favorite story not found: {0}")]
    StoryNotFound(Uuid),

    #[error("No chapter recorded for this day")]
    ChapterNotFound,

    #[error("Auth error: {0}")]
    Auth(String),

    #[error("Feedback webhook error: {0}")]
    Webhook(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
