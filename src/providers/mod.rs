//! Pluggable collaborators: model runtime, emotion classifier and the
//! memory/search context sources.

use async_trait::async_trait;

use crate::chat_manager::types::EmotionData;
use crate::error::Result;

pub mod llamacpp;

/// Lifecycle shared by every pluggable component.
#[async_trait]
pub trait Component: Send + Sync {
    fn name(&self) -> &'static str;

    async fn initialize(&self) -> Result<()>;

    fn is_ready(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCompletion {
    pub text: String,
    pub tokens_generated: u32,
}

#[async_trait]
pub trait ModelRuntime: Component {
    /// Errors must be surfaced; an empty completion is `CompanionError::EmptyOutput`.
    async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<RawCompletion>;
}

#[async_trait]
pub trait EmotionClassifier: Component {
    async fn classify(&self, text: &str) -> Result<EmotionData>;
}

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub limit: usize,
    pub user_name: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            user_name: None,
        }
    }
}

/// Memory recall or web search. `None` means "nothing to add" and the
/// corresponding prompt section is omitted; implementations swallow their own
/// failures.
#[async_trait]
pub trait ContextSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self, query: &str, character: &str, options: &FetchOptions) -> Option<String>;
}
