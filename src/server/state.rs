//! Application state for the RAG server

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::providers::{ChromaStore, GeminiApi, GeminiEmbedder, GeminiGenerator};
use crate::rag::{builtin_knowledge_base, RagEngine};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: RagConfig,
    /// Question answering engine
    engine: RagEngine,
}

impl AppState {
    /// Create new application state.
    ///
    /// Wires up the Gemini providers and the Chroma collection, then seeds
    /// the knowledge base. Any failure here aborts startup.
    pub async fn new(config: RagConfig) -> Result<Self> {
        tracing::info!("Initializing RAG application state...");

        let api = Arc::new(GeminiApi::new(&config.gemini)?);

        let embedder = Arc::new(GeminiEmbedder::new(
            Arc::clone(&api),
            config.gemini.embed_model.clone(),
            config.embedding.dimensions,
        ));
        tracing::info!(
            "Gemini embedder initialized (model: {}, {} dimensions)",
            config.gemini.embed_model,
            config.embedding.dimensions
        );

        let llm = Arc::new(GeminiGenerator::new(
            api,
            config.gemini.generate_model.clone(),
        ));
        tracing::info!(
            "Gemini generator initialized (model: {})",
            config.gemini.generate_model
        );

        let store = Arc::new(
            ChromaStore::connect(
                &config.chroma,
                &config.gemini.embed_model,
                config.embedding.dimensions,
            )
            .await?,
        );

        let engine = RagEngine::new(
            embedder,
            llm,
            store,
            &config.embedding,
            &config.retrieval,
        );

        engine.ingest(builtin_knowledge_base()).await?;
        let stored = engine.stored_chunks().await?;
        tracing::info!("Collection holds {} chunks", stored);

        Ok(Self {
            inner: Arc::new(AppStateInner { config, engine }),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    /// Get the question answering engine
    pub fn engine(&self) -> &RagEngine {
        &self.inner.engine
    }
}
