//! Story library service.
//!
//! Manages the user's narrative universe: the favorite stories chapters
//! are woven from. The 3-5 stories bound is a UI rule and deliberately not
//! enforced here.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{FavoriteStory, StoryKind};
use crate::domain::ports::FavoriteStoryRepository;

pub struct StoryLibraryService {
    repository: Arc<dyn FavoriteStoryRepository>,
}

impl StoryLibraryService {
    pub fn new(repository: Arc<dyn FavoriteStoryRepository>) -> Self {
        Self { repository }
    }

    /// Add a story to the universe. Empty titles are rejected before any
    /// write.
    pub async fn add_story(
        &self,
        user_id: Uuid,
        title: &str,
        kind: StoryKind,
        narrative_tag: Option<&str>,
    ) -> DomainResult<FavoriteStory> {
        let mut story = FavoriteStory::new(user_id, title.trim(), kind);
        if let Some(tag) = narrative_tag.map(str::trim).filter(|t| !t.is_empty()) {
            story = story.with_narrative_tag(tag);
        }
        story.validate().map_err(DomainError::ValidationFailed)?;
        self.repository.insert(&story).await?;
        Ok(story)
    }

    /// The user's stories, oldest first.
    pub async fn stories_for_user(&self, user_id: Uuid) -> DomainResult<Vec<FavoriteStory>> {
        self.repository.list_for_user(user_id).await
    }

    /// Remove a story from the universe.
    pub async fn remove_story(&self, user_id: Uuid, story_id: Uuid) -> DomainResult<()> {
        self.repository.delete(user_id, story_id).await
    }
}
