//! Story context builder.
//!
//! Assembles the bounded, ordered context object a generation runs on.
//! Any failing read aborts with `ContextUnavailable`: silently generating
//! from an empty context would desynchronize the narrative from reality.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    FavoriteStoryRef, GoalOutcome, ImpactType, RecentChapter, StoryContext, TodayPerformance,
    UserAccount,
};
use crate::domain::ports::{ChapterRepository, DailyGoalRepository, FavoriteStoryRepository};

/// How many prior chapters a generation may see.
pub const RECENT_CHAPTER_LIMIT: u32 = 5;

pub struct ContextBuilder {
    stories: Arc<dyn FavoriteStoryRepository>,
    chapters: Arc<dyn ChapterRepository>,
    goals: Arc<dyn DailyGoalRepository>,
}

impl ContextBuilder {
    pub fn new(
        stories: Arc<dyn FavoriteStoryRepository>,
        chapters: Arc<dyn ChapterRepository>,
        goals: Arc<dyn DailyGoalRepository>,
    ) -> Self {
        Self {
            stories,
            chapters,
            goals,
        }
    }

    /// Build the context for `user` as of `today`.
    pub async fn build(&self, user: &UserAccount, today: NaiveDate) -> DomainResult<StoryContext> {
        let favorite_stories = self
            .stories
            .list_for_user(user.id)
            .await
            .map_err(|e| DomainError::ContextUnavailable(e.to_string()))?
            .into_iter()
            .map(|s| FavoriteStoryRef {
                title: s.title,
                kind: s.kind,
                narrative_tag: s.narrative_tag,
            })
            .collect();

        // Fetched newest-first; reversed so the narrative reads forward.
        let mut recent: Vec<RecentChapter> = self
            .chapters
            .list_recent_before(user.id, today, RECENT_CHAPTER_LIMIT)
            .await
            .map_err(|e| DomainError::ContextUnavailable(e.to_string()))?
            .into_iter()
            .map(|c| RecentChapter {
                date: c.date,
                summary: c.summary,
                impact: c.impact,
            })
            .collect();
        recent.reverse();

        let goals = self
            .goals
            .list_for_date(user.id, today)
            .await
            .map_err(|e| DomainError::ContextUnavailable(e.to_string()))?;

        let total_goals = u32::try_from(goals.len()).unwrap_or(u32::MAX);
        let completed_goals =
            u32::try_from(goals.iter().filter(|g| g.completed).count()).unwrap_or(u32::MAX);

        let context = StoryContext {
            protagonist: user.name.clone(),
            favorite_stories,
            recent_chapters: recent,
            today: TodayPerformance {
                impact: ImpactType::classify(total_goals, completed_goals),
                total_goals,
                completed_goals,
                goals: goals
                    .into_iter()
                    .map(|g| GoalOutcome {
                        text: g.goal_text,
                        completed: g.completed,
                    })
                    .collect(),
            },
        };

        debug!(
            user_id = %user.id,
            date = %today,
            stories = context.favorite_stories.len(),
            recent_chapters = context.recent_chapters.len(),
            impact = context.today.impact.as_str(),
            "story context assembled"
        );

        Ok(context)
    }
}
