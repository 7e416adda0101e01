//! The narrative-generation core and its supporting services.

pub mod chronicle;
pub mod context_builder;
pub mod fallback;
pub mod feedback;
pub mod generation;
pub mod goal_service;
pub mod library;
pub mod prompt;

pub use chronicle::ChronicleService;
pub use context_builder::{ContextBuilder, RECENT_CHAPTER_LIMIT};
pub use fallback::FallbackGenerator;
pub use feedback::FeedbackClient;
pub use generation::ProviderChain;
pub use goal_service::GoalService;
pub use library::StoryLibraryService;
