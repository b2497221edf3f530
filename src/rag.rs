//! Retrieval-augmented question answering
//!
//! Owns the ingest-then-ask lifecycle. At startup every knowledge chunk is
//! embedded in parallel and stored in one batched call; afterwards each
//! question is embedded, matched against the store, and answered strictly
//! from the retrieved context.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::config::{EmbeddingConfig, RetrievalConfig};
use crate::error::Result;
use crate::generation::{PromptBuilder, FALLBACK_ANSWER};
use crate::providers::embedding::{EmbedTask, EmbeddingProvider};
use crate::providers::llm::LlmProvider;
use crate::providers::vector_store::VectorStoreProvider;
use crate::types::KnowledgeChunk;

/// The seeded knowledge base
pub fn builtin_knowledge_base() -> Vec<KnowledgeChunk> {
    [
        "RAG stands for Retrieval Augmented Generation.",
        "Embeddings convert text into numerical vectors.",
        "Vector databases store embeddings for similarity search.",
    ]
    .iter()
    .enumerate()
    .map(|(index, text)| KnowledgeChunk::new(index, *text, "phase1"))
    .collect()
}

/// Question answering engine over a vector store
pub struct RagEngine {
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LlmProvider>,
    store: Arc<dyn VectorStoreProvider>,
    document_task: EmbedTask,
    query_task: EmbedTask,
    top_k: usize,
}

impl RagEngine {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
        store: Arc<dyn VectorStoreProvider>,
        embedding: &EmbeddingConfig,
        retrieval: &RetrievalConfig,
    ) -> Self {
        Self {
            embedder,
            llm,
            store,
            document_task: embedding.document_task,
            query_task: embedding.query_task,
            top_k: retrieval.top_k,
        }
    }

    /// Embed all chunks in parallel and store them in one batched call.
    ///
    /// All-or-nothing: one failed embedding aborts the whole ingest and
    /// nothing reaches the store.
    pub async fn ingest(&self, chunks: Vec<KnowledgeChunk>) -> Result<usize> {
        let embeddings = try_join_all(
            chunks
                .iter()
                .map(|chunk| self.embedder.embed(&chunk.text, self.document_task)),
        )
        .await?;

        self.store.add_batch(&chunks, &embeddings).await?;

        tracing::info!("Knowledge ingested successfully ({} chunks)", chunks.len());
        Ok(chunks.len())
    }

    /// Answer a question strictly from retrieved context.
    ///
    /// When retrieval comes back empty the fixed fallback answer is
    /// returned and the LLM is never called.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let query_embedding = self.embedder.embed(question, self.query_task).await?;

        let documents = self.store.query(&query_embedding, self.top_k).await?;
        let context = PromptBuilder::build_context(&documents);

        if context.is_empty() {
            tracing::info!("No context retrieved, returning fallback answer");
            return Ok(FALLBACK_ANSWER.to_string());
        }

        let prompt = PromptBuilder::build_grounded_prompt(question, &context);
        self.llm.generate(&prompt).await
    }

    /// Number of chunks in the underlying store
    pub async fn stored_chunks(&self) -> Result<usize> {
        self.store.count().await
    }
}
