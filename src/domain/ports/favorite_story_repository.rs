//! Favorite story repository port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::FavoriteStory;

/// Repository interface for a user's narrative universe.
#[async_trait]
pub trait FavoriteStoryRepository: Send + Sync {
    /// Insert a new favorite story.
    async fn insert(&self, story: &FavoriteStory) -> DomainResult<()>;

    /// All favorite stories for a user, oldest first.
    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<FavoriteStory>>;

    /// Delete a favorite story owned by the user.
    async fn delete(&self, user_id: Uuid, id: Uuid) -> DomainResult<()>;
}
