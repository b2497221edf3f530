//! Chroma vector store client
//!
//! Speaks the Chroma REST API and stays bound to one collection. The
//! collection is resolved get-or-create at startup and its stored metadata
//! must match the configured embedding contract before any vector moves.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ChromaConfig;
use crate::error::{Error, Result};
use crate::providers::vector_store::VectorStoreProvider;
use crate::types::{ChunkMetadata, KnowledgeChunk};

/// Chroma-backed vector store bound to a single collection
pub struct ChromaStore {
    client: reqwest::Client,
    base_url: String,
    collection_id: String,
    collection_name: String,
}

// Wire types for the collections API

#[derive(Serialize)]
struct CreateCollectionRequest {
    name: String,
    metadata: CollectionMetadata,
    get_or_create: bool,
}

#[derive(Serialize)]
struct CollectionMetadata {
    description: String,
    #[serde(rename = "embeddingModel")]
    embedding_model: String,
    dimension: usize,
    distance: String,
}

#[derive(Deserialize)]
struct CollectionResponse {
    id: String,
    name: String,
    #[serde(default)]
    metadata: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct AddRequest {
    ids: Vec<String>,
    embeddings: Vec<Vec<f32>>,
    metadatas: Vec<ChunkMetadata>,
    documents: Vec<String>,
}

#[derive(Serialize)]
struct QueryRequest {
    query_embeddings: Vec<Vec<f32>>,
    n_results: usize,
    include: Vec<&'static str>,
}

#[derive(Deserialize)]
struct QueryResponse {
    documents: Vec<Vec<Option<String>>>,
}

impl ChromaStore {
    /// Connect to Chroma and resolve the configured collection.
    ///
    /// Creates the collection with contract metadata when it does not exist
    /// yet. When it does, the stored dimension and distance must match the
    /// running configuration.
    pub async fn connect(
        config: &ChromaConfig,
        embedding_model: &str,
        dimensions: usize,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = config.url.trim_end_matches('/').to_string();

        let request = CreateCollectionRequest {
            name: config.collection.clone(),
            metadata: CollectionMetadata {
                description: config.description.clone(),
                embedding_model: embedding_model.to_string(),
                dimension: dimensions,
                distance: config.distance.clone(),
            },
            get_or_create: true,
        };

        let response = client
            .post(format!("{}/api/v1/collections", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::VectorDb(format!("Chroma request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::VectorDb(format!(
                "Failed to open collection '{}' ({}): {}",
                config.collection, status, body
            )));
        }

        let collection: CollectionResponse = response
            .json()
            .await
            .map_err(|e| Error::VectorDb(format!("Failed to parse Chroma response: {}", e)))?;

        validate_contract(&collection, dimensions, &config.distance)?;

        tracing::info!(
            "Connected to Chroma collection '{}' ({})",
            collection.name,
            collection.id
        );

        Ok(Self {
            client,
            base_url,
            collection_id: collection.id,
            collection_name: collection.name,
        })
    }

    fn collection_url(&self, suffix: &str) -> String {
        format!(
            "{}/api/v1/collections/{}/{}",
            self.base_url, self.collection_id, suffix
        )
    }
}

/// Check a resolved collection's stored metadata against the configured
/// embedding contract. Dimension and distance must match when present;
/// a collection without readable metadata only gets a warning.
fn validate_contract(
    collection: &CollectionResponse,
    dimensions: usize,
    distance: &str,
) -> Result<()> {
    let metadata = match &collection.metadata {
        Some(metadata) => metadata,
        None => {
            tracing::warn!(
                "Collection '{}' has no stored metadata to validate against",
                collection.name
            );
            return Ok(());
        }
    };

    if let Some(stored) = metadata.get("dimension").and_then(|v| v.as_u64()) {
        if stored as usize != dimensions {
            return Err(Error::Config(format!(
                "Collection '{}' stores {}-dimensional vectors but the embedder produces {}",
                collection.name, stored, dimensions
            )));
        }
    }

    if let Some(stored) = metadata.get("distance").and_then(|v| v.as_str()) {
        if stored != distance {
            return Err(Error::Config(format!(
                "Collection '{}' uses '{}' distance but '{}' is configured",
                collection.name, stored, distance
            )));
        }
    }

    Ok(())
}

#[async_trait]
impl VectorStoreProvider for ChromaStore {
    async fn add_batch(
        &self,
        chunks: &[KnowledgeChunk],
        embeddings: &[Vec<f32>],
    ) -> Result<()> {
        if chunks.len() != embeddings.len() {
            return Err(Error::internal(format!(
                "Got {} chunks but {} embeddings",
                chunks.len(),
                embeddings.len()
            )));
        }

        let request = AddRequest {
            ids: chunks.iter().map(|c| c.id.clone()).collect(),
            embeddings: embeddings.to_vec(),
            metadatas: chunks.iter().map(|c| c.metadata.clone()).collect(),
            documents: chunks.iter().map(|c| c.text.clone()).collect(),
        };

        let response = self
            .client
            .post(self.collection_url("add"))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::VectorDb(format!("Chroma request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::VectorDb(format!(
                "Failed to add to collection '{}' ({}): {}",
                self.collection_name, status, body
            )));
        }

        Ok(())
    }

    async fn query(&self, embedding: &[f32], n_results: usize) -> Result<Vec<String>> {
        let request = QueryRequest {
            query_embeddings: vec![embedding.to_vec()],
            n_results,
            include: vec!["documents"],
        };

        let response = self
            .client
            .post(self.collection_url("query"))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::VectorDb(format!("Chroma request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::VectorDb(format!(
                "Failed to query collection '{}' ({}): {}",
                self.collection_name, status, body
            )));
        }

        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| Error::VectorDb(format!("Failed to parse Chroma response: {}", e)))?;

        // One query embedding in, one result row out.
        Ok(parsed
            .documents
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect())
    }

    async fn count(&self) -> Result<usize> {
        let response = self
            .client
            .get(self.collection_url("count"))
            .send()
            .await
            .map_err(|e| Error::VectorDb(format!("Chroma request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::VectorDb(format!(
                "Failed to count collection '{}' ({}): {}",
                self.collection_name, status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::VectorDb(format!("Failed to parse Chroma response: {}", e)))
    }

    fn name(&self) -> &str {
        "chroma"
    }
}
