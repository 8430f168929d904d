pub mod cancellation;
pub mod chat_manager;
pub mod config;
pub mod error;
pub mod logger;
pub mod lorebook;
pub mod providers;
pub mod safety;
pub mod serde_utils;
pub mod utils;

pub use cancellation::CancellationRegistry;
pub use chat_manager::types::{GenerationOutcome, GenerationRequest, GenerationResult};
pub use chat_manager::LlmProcessor;
pub use config::ProcessorConfig;
pub use error::{CompanionError, Result};
