//! Provider abstractions for embeddings, generation, and vector storage
//!
//! The engine holds these as trait objects so tests can substitute fakes
//! for the remote collaborators.

pub mod chroma;
pub mod embedding;
pub mod gemini;
pub mod llm;
pub mod vector_store;

pub use chroma::ChromaStore;
pub use embedding::{EmbedTask, EmbeddingProvider};
pub use gemini::{GeminiApi, GeminiEmbedder, GeminiGenerator};
pub use llm::LlmProvider;
pub use vector_store::VectorStoreProvider;
