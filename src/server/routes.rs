//! HTTP route handlers

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::server::state::AppState;

/// Ask request payload
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// The question to answer
    pub question: String,
}

/// Ask response payload
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Grounded answer text
    pub answer: String,
    /// End-to-end processing time
    pub processing_time_ms: u64,
}

/// Service info endpoint
pub async fn info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "micro-rag",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Question answering over a seeded knowledge base",
        "endpoints": {
            "GET /health": "Health check",
            "POST /ask": "Ask a question ({\"question\": \"...\"})",
        },
    }))
}

/// Answer a question against the knowledge base
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(Error::InvalidRequest(
            "question must not be empty".to_string(),
        ));
    }

    let start = Instant::now();
    tracing::info!("Question: \"{}\"", question);

    let answer = state.engine().ask(question).await?;

    let processing_time_ms = start.elapsed().as_millis() as u64;
    tracing::info!("Answered in {}ms", processing_time_ms);

    Ok(Json(AskResponse {
        answer,
        processing_time_ms,
    }))
}
