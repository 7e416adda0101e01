//! Story generation context.
//!
//! The context is the bounded, ordered snapshot of everything a provider is
//! allowed to see when writing the next chapter: the narrative universe,
//! recent continuity, and today's performance. It is assembled once per
//! generation by the context builder and passed by reference through the
//! provider chain and the fallback generator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::impact::ImpactType;
use super::story::StoryKind;

/// A favorite story reduced to what the narrative needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteStoryRef {
    pub title: String,
    pub kind: StoryKind,
    pub narrative_tag: Option<String>,
}

/// A prior chapter used for narrative continuity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentChapter {
    pub date: NaiveDate,
    pub summary: String,
    pub impact: ImpactType,
}

/// The outcome of a single goal, as shown to the narrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalOutcome {
    pub text: String,
    pub completed: bool,
}

/// Today's classified performance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayPerformance {
    pub impact: ImpactType,
    pub total_goals: u32,
    pub completed_goals: u32,
    pub goals: Vec<GoalOutcome>,
}

/// Everything the narrator sees for one generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryContext {
    /// Display name of the user; the protagonist of every chapter.
    pub protagonist: String,
    /// The user's narrative universe.
    pub favorite_stories: Vec<FavoriteStoryRef>,
    /// Up to the 5 most recent chapters strictly before today, ordered
    /// oldest to newest so the narrative reads forward.
    pub recent_chapters: Vec<RecentChapter>,
    pub today: TodayPerformance,
}

impl StoryContext {
    /// The chapter written most recently before today, if any.
    pub fn last_chapter(&self) -> Option<&RecentChapter> {
        self.recent_chapters.last()
    }
}
