//! RAG server binary
//!
//! Run with: cargo run --bin micro-rag-server

use micro_rag::{config::RagConfig, server::RagServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "micro_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════╗
║                     micro-rag                     ║
║        Grounded Q&A over seeded knowledge         ║
╚═══════════════════════════════════════════════════╝
"#
    );

    // Load configuration
    let config = RagConfig::from_env()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Embedding model: {}", config.gemini.embed_model);
    tracing::info!("  - Embedding dimensions: {}", config.embedding.dimensions);
    tracing::info!("  - Generation model: {}", config.gemini.generate_model);
    tracing::info!("  - Collection: {}", config.chroma.collection);

    // Check Chroma
    tracing::info!("Checking Chroma at {}...", config.chroma.url);
    let client = reqwest::Client::new();
    let heartbeat = format!(
        "{}/api/v1/heartbeat",
        config.chroma.url.trim_end_matches('/')
    );
    match client.get(heartbeat).send().await {
        Ok(resp) if resp.status().is_success() => {
            tracing::info!("Chroma is running");
        }
        _ => {
            tracing::warn!("Chroma not available at {}", config.chroma.url);
            tracing::warn!("Please start Chroma:");
            tracing::warn!("  1. Install: pip install chromadb");
            tracing::warn!("  2. Start: chroma run --host localhost --port 8000");
        }
    }

    // Create and start server (seeds the knowledge base)
    let server = RagServer::new(config).await?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  GET  /     - Service info");
    println!("  POST /ask  - Ask a question");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
