//! Core types for the RAG pipeline

use serde::{Deserialize, Serialize};

/// One unit of source text stored for retrieval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeChunk {
    /// Synthetic identifier (`doc-<index>`)
    pub id: String,
    /// Chunk text
    pub text: String,
    /// Metadata stored alongside the chunk
    pub metadata: ChunkMetadata,
}

impl KnowledgeChunk {
    /// Create a chunk with the conventional `doc-<index>` identifier
    pub fn new(index: usize, text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: format!("doc-{}", index),
            text: text.into(),
            metadata: ChunkMetadata {
                source: source.into(),
                chunk: index,
            },
        }
    }
}

/// Metadata attached to each stored chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Label of the ingest source
    pub source: String,
    /// Position of the chunk within its source
    pub chunk: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_id_convention() {
        let chunk = KnowledgeChunk::new(2, "text", "phase1");
        assert_eq!(chunk.id, "doc-2");
        assert_eq!(chunk.metadata.source, "phase1");
        assert_eq!(chunk.metadata.chunk, 2);
    }
}
