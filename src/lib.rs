//! micro-rag: question answering over a seeded knowledge base, plus a set
//! of file-to-text extraction tools
//!
//! The service side embeds a small built-in knowledge base into a Chroma
//! collection at startup and answers questions strictly from retrieved
//! context via Gemini. The tool side turns text, HTML, Markdown, Word,
//! image, and PDF inputs into cleaned plain text ready for ingestion.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod generation;
pub mod normalize;
pub mod providers;
pub mod rag;
pub mod server;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use rag::{builtin_knowledge_base, RagEngine};
pub use types::{ChunkMetadata, KnowledgeChunk};
