//! Storycraft - Narrative Progress Engine
//!
//! Storycraft turns a user's daily goal results into an ongoing personalized
//! story: each day becomes one chapter, written in the universe of the user's
//! favorite stories, with tone keyed to how well the day went.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure business logic, models, and port traits
//! - **Service Layer** (`services`): Context building, prompt rendering,
//!   provider chaining, fallback composition, chapter orchestration
//! - **Adapter Layer** (`adapters`): `SQLite` persistence and HTTP
//!   text-generation providers
//!
//! # Example
//!
//! ```ignore
//! use storycraft::services::ChronicleService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Wire repositories and providers, then write today's chapter
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod logging;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigLoader};
pub use domain::models::{
    Chapter, Config, DailyGoal, DatabaseConfig, FavoriteStory, ImpactType, LoggingConfig,
    StoryContext, StoryKind, UserAccount, UserStatistics,
};
pub use domain::ports::{
    AuthSession, ChapterRepository, DailyGoalRepository, FavoriteStoryRepository, StoryProvider,
    StatisticsRepository,
};
pub use services::{
    ChronicleService, ContextBuilder, FallbackGenerator, GoalService, ProviderChain,
    StoryLibraryService,
};
