//! Vector store provider trait

use async_trait::async_trait;

use crate::error::Result;
use crate::types::KnowledgeChunk;

/// Trait for vector storage and similarity search
///
/// Implementations:
/// - `ChromaStore`: Chroma REST API bound to one collection
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Store all chunks with their embeddings in one batched call.
    ///
    /// `chunks` and `embeddings` are parallel slices; entry `i` of one
    /// belongs to entry `i` of the other.
    async fn add_batch(
        &self,
        chunks: &[KnowledgeChunk],
        embeddings: &[Vec<f32>],
    ) -> Result<()>;

    /// Return the texts of the `n_results` chunks nearest to `embedding`,
    /// most similar first.
    async fn query(&self, embedding: &[f32], n_results: usize) -> Result<Vec<String>>;

    /// Number of stored chunks
    async fn count(&self) -> Result<usize>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
