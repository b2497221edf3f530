//! Gemini API clients for embeddings and answer generation
//!
//! Both providers share one API handle carrying the key, base URL, and an
//! HTTP client with a request timeout. Wire shapes follow the
//! generativelanguage v1beta REST API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::error::{Error, Result};
use crate::providers::embedding::{EmbedTask, EmbeddingProvider};
use crate::providers::llm::LlmProvider;

/// Shared handle for the Gemini REST API
pub struct GeminiApi {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiApi {
    /// Build the handle from configuration
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str, action: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, model, action)
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.post(url).header("x-goog-api-key", &self.api_key)
    }
}

// Wire types for embedContent

#[derive(Serialize)]
struct EmbedRequest {
    content: EmbedContent,
    #[serde(rename = "taskType")]
    task_type: &'static str,
    #[serde(rename = "outputDimensionality")]
    output_dimensionality: usize,
}

#[derive(Serialize)]
struct EmbedContent {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

/// Gemini embedding provider (embedContent)
pub struct GeminiEmbedder {
    api: Arc<GeminiApi>,
    model: String,
    dimensions: usize,
}

impl GeminiEmbedder {
    pub fn new(api: Arc<GeminiApi>, model: impl Into<String>, dimensions: usize) -> Self {
        Self {
            api,
            model: model.into(),
            dimensions,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbedder {
    async fn embed(&self, text: &str, task: EmbedTask) -> Result<Vec<f32>> {
        let request = EmbedRequest {
            content: EmbedContent {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            },
            task_type: task.as_str(),
            output_dimensionality: self.dimensions,
        };

        let response = self
            .api
            .post(&self.api.endpoint(&self.model, "embedContent"))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Embedding(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Embedding(format!(
                "Gemini embedding failed ({}): {}",
                status, body
            )));
        }

        let parsed: EmbedResponse = response
            .json()
            .await
            .map_err(|e| Error::Embedding(format!("Failed to parse Gemini response: {}", e)))?;

        let values = parsed.embedding.values;
        if values.len() != self.dimensions {
            return Err(Error::Embedding(format!(
                "Expected {} dimensions, got {}",
                self.dimensions,
                values.len()
            )));
        }

        Ok(values)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

// Wire types for generateContent

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// Gemini generation provider (generateContent)
pub struct GeminiGenerator {
    api: Arc<GeminiApi>,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api: Arc<GeminiApi>, model: impl Into<String>) -> Self {
        Self {
            api,
            model: model.into(),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .api
            .post(&self.api.endpoint(&self.model, "generateContent"))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Llm(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Llm(format!(
                "Gemini generation failed ({}): {}",
                status, body
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Llm(format!("Failed to parse Gemini response: {}", e)))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| Error::Llm("No text in Gemini response".to_string()))
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_format() {
        let api = GeminiApi::new(&GeminiConfig {
            api_key: "test-key".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            api.endpoint("gemini-embedding-001", "embedContent"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-embedding-001:embedContent"
        );
    }

    #[test]
    fn test_embed_request_wire_shape() {
        let request = EmbedRequest {
            content: EmbedContent {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            },
            task_type: EmbedTask::RetrievalDocument.as_str(),
            output_dimensionality: 768,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["taskType"], "RETRIEVAL_DOCUMENT");
        assert_eq!(json["outputDimensionality"], 768);
        assert_eq!(json["content"]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_generate_response_extracts_first_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}], "role": "model"}}
            ]
        }"#;

        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text);
        assert_eq!(text.as_deref(), Some("first"));
    }
}
