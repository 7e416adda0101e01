//! Text-generation provider bindings.
//!
//! Each backend adapts the story context to its own wire format; the
//! registry enrolls whichever backends the configuration enables.

pub mod anthropic;
pub mod mock;
pub mod n8n;
pub mod openai;
pub mod registry;

pub use anthropic::AnthropicProvider;
pub use mock::MockProvider;
pub use n8n::N8nProvider;
pub use openai::OpenAiProvider;
pub use registry::{chain_from_config, enrolled_providers};
