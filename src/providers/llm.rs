//! LLM provider trait for answer generation

use async_trait::async_trait;

use crate::error::Result;

/// Trait for generating an answer from an assembled prompt
///
/// Implementations:
/// - `GeminiGenerator`: Gemini generateContent API
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate text for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier for logging
    fn model(&self) -> &str;

    /// Provider name for logging
    fn name(&self) -> &str;
}
