//! Ports (interfaces) to everything outside the narrative core.

pub mod auth;
pub mod chapter_repository;
pub mod daily_goal_repository;
pub mod favorite_story_repository;
pub mod provider;
pub mod statistics_repository;

pub use auth::AuthSession;
pub use chapter_repository::ChapterRepository;
pub use daily_goal_repository::DailyGoalRepository;
pub use favorite_story_repository::FavoriteStoryRepository;
pub use provider::{ProviderError, StoryProvider};
pub use statistics_repository::StatisticsRepository;
