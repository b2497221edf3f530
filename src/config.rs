//! Configuration for the RAG pipeline

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::providers::embedding::EmbedTask;

/// Main pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Gemini API configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Embedding contract configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    /// Chroma vector database configuration
    #[serde(default)]
    pub chroma: ChromaConfig,
    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

impl RagConfig {
    /// Build configuration from defaults with environment overrides.
    ///
    /// `GEMINI_API_KEY` is required; `CHROMA_URL` and `PORT` are optional.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        config.gemini.api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| Error::Config("GEMINI_API_KEY is not set".to_string()))?;

        if let Ok(url) = std::env::var("CHROMA_URL") {
            config.chroma.url = url;
        }

        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| Error::Config(format!("Invalid PORT value: {}", e)))?;
        }

        Ok(config)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

/// Gemini API configuration (embedding + generation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (from GEMINI_API_KEY)
    #[serde(default)]
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Embedding model name
    pub embed_model: String,
    /// Generation model name
    pub generate_model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            embed_model: "gemini-embedding-001".to_string(),
            generate_model: "gemini-2.5-flash".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Embedding contract: dimensionality plus the task mode used on each
/// side of the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Embedding dimensions (gemini-embedding-001 supports 768)
    pub dimensions: usize,
    /// Task type for knowledge-chunk embeddings at ingest
    pub document_task: EmbedTask,
    /// Task type for question embeddings at query
    pub query_task: EmbedTask,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: 768,
            document_task: EmbedTask::RetrievalDocument,
            query_task: EmbedTask::RetrievalQuery,
        }
    }
}

/// Chroma vector database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChromaConfig {
    /// Chroma server URL (from CHROMA_URL)
    pub url: String,
    /// Collection name
    pub collection: String,
    /// Collection description stored in metadata
    pub description: String,
    /// Distance metric the collection must use
    pub distance: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ChromaConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000".to_string(),
            collection: "phase1-knowledge".to_string(),
            description: "Phase 1 RAG knowledge base".to_string(),
            distance: "cosine".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of nearest chunks to retrieve per question
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_contract() {
        let config = RagConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.embedding.dimensions, 768);
        assert_eq!(config.embedding.document_task, EmbedTask::RetrievalDocument);
        assert_eq!(config.embedding.query_task, EmbedTask::RetrievalQuery);
        assert_eq!(config.chroma.collection, "phase1-knowledge");
        assert_eq!(config.chroma.distance, "cosine");
        assert_eq!(config.retrieval.top_k, 2);
    }
}
