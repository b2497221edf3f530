//! Embedding provider trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Task mode attached to every embedding request.
///
/// Ingest and query use different modes; each side of the store names
/// its own in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmbedTask {
    /// Knowledge chunks at ingest time
    RetrievalDocument,
    /// Questions at query time
    RetrievalQuery,
}

impl EmbedTask {
    /// Wire name of the task mode
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedTask::RetrievalDocument => "RETRIEVAL_DOCUMENT",
            EmbedTask::RetrievalQuery => "RETRIEVAL_QUERY",
        }
    }
}

/// Trait for text embedding
///
/// Implementations:
/// - `GeminiEmbedder`: Gemini embedContent API
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text under the given task mode
    async fn embed(&self, text: &str, task: EmbedTask) -> Result<Vec<f32>>;

    /// Dimensionality of the vectors this provider produces
    fn dimensions(&self) -> usize;

    /// Provider name for logging
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_wire_names() {
        assert_eq!(EmbedTask::RetrievalDocument.as_str(), "RETRIEVAL_DOCUMENT");
        assert_eq!(EmbedTask::RetrievalQuery.as_str(), "RETRIEVAL_QUERY");
    }
}
