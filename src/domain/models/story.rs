//! Favorite stories and chapter domain models.
//!
//! Favorite stories define the narrative universe a user's adventure is
//! woven from. Chapters are the generated daily entries of that adventure,
//! one per user per calendar day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::impact::ImpactType;

/// Medium of a favorite story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryKind {
    Movie,
    Series,
    Book,
    Game,
}

impl StoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
            Self::Book => "book",
            Self::Game => "game",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "movie" => Some(Self::Movie),
            "series" => Some(Self::Series),
            "book" => Some(Self::Book),
            "game" => Some(Self::Game),
            _ => None,
        }
    }
}

/// A story the user picked as part of their narrative universe.
///
/// The UI limits each user to 3-5 of these; the core does not enforce that
/// bound and treats whatever is stored as the universe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteStory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub kind: StoryKind,
    /// Optional free-form tag refining how the story flavors the narrative
    /// (e.g. "space opera", "heist").
    pub narrative_tag: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FavoriteStory {
    pub fn new(user_id: Uuid, title: impl Into<String>, kind: StoryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            kind,
            narrative_tag: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_narrative_tag(mut self, tag: impl Into<String>) -> Self {
        self.narrative_tag = Some(tag.into());
        self
    }

    /// Title must be non-empty after trimming; enforced before any I/O.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("story title cannot be empty".to_string());
        }
        Ok(())
    }
}

/// One persisted chapter of a user's adventure.
///
/// Invariant: at most one chapter per (user_id, date). The repository
/// enforces this with an upsert-on-conflict, so re-generating a day's
/// chapter overwrites rather than appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub summary: String,
    pub impact: ImpactType,
    pub created_at: DateTime<Utc>,
}

impl Chapter {
    pub fn new(
        user_id: Uuid,
        date: NaiveDate,
        summary: impl Into<String>,
        impact: ImpactType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            summary: summary.into(),
            impact,
            created_at: Utc::now(),
        }
    }
}
