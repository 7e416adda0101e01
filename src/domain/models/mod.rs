//! Domain models for the storycraft core.

pub mod account;
pub mod config;
pub mod context;
pub mod goal;
pub mod impact;
pub mod stats;
pub mod story;

pub use account::UserAccount;
pub use config::{
    AnthropicConfig, Config, DatabaseConfig, FeedbackConfig, GenerationConfig, LoggingConfig,
    N8nConfig, OpenAiConfig, ProvidersConfig,
};
pub use context::{FavoriteStoryRef, GoalOutcome, RecentChapter, StoryContext, TodayPerformance};
pub use goal::DailyGoal;
pub use impact::ImpactType;
pub use stats::UserStatistics;
pub use story::{Chapter, FavoriteStory, StoryKind};
