mod chat;
mod config;
mod errors;
mod extract;
mod index;
mod ingest;
mod llm;
mod models;
mod parser;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::index::pinecone::PineconeIndex;
use crate::llm::gemini::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    // One Gemini client backs both model capabilities
    let gemini = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!(
        "Gemini client initialized (embedding: {}, generation: {})",
        llm::gemini::EMBEDDING_MODEL,
        llm::gemini::GENERATION_MODEL
    );

    let pinecone = Arc::new(PineconeIndex::new(
        config.pinecone_api_key.clone(),
        config.pinecone_index_host.clone(),
    ));
    info!("Vector index client initialized");

    let state = AppState {
        embedder: gemini.clone(),
        index: pinecone,
        generator: gemini,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
