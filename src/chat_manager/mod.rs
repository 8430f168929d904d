pub mod generation_params;
pub mod prompt_engine;
pub mod prompts;
pub mod response_cleaner;
pub mod service;
pub mod time_context;
pub mod types;

pub use prompt_engine::{PromptBuilder, PromptRequest};
pub use response_cleaner::ResponseCleaner;
pub use service::{HealthReport, LlmProcessor};
