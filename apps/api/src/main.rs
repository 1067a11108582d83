mod cache;
mod config;
mod errors;
mod extraction;
mod handlers;
mod identity;
mod llm_client;
mod matching;
mod models;
mod pipeline;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cache::{memory::MemoryStore, redis::RedisStore, CacheHandle, CacheStore};
use crate::config::Config;
use crate::extraction::key_info::{KeyInfoExtractor, LlmExtractor, RuleBasedExtractor};
use crate::llm_client::LlmClient;
use crate::matching::scorer::{KeywordScorer, LlmScorer, MatchScorer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CVMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Cache backend: Redis when configured, process-local otherwise
    let store: Arc<dyn CacheStore> = match &config.redis_url {
        Some(url) => {
            let store = RedisStore::connect(url)?;
            info!("Redis cache backend initialized");
            Arc::new(store)
        }
        None => {
            info!("In-process cache backend initialized");
            Arc::new(MemoryStore::new())
        }
    };
    let cache = CacheHandle::new(
        store,
        Duration::from_secs(config.resume_ttl_secs),
        Duration::from_secs(config.match_ttl_secs),
    );

    // Extraction and scoring backends: LLM-assisted when a key is present,
    // rule-based / keyword-overlap otherwise
    let (extractor, scorer): (Arc<dyn KeyInfoExtractor>, Arc<dyn MatchScorer>) =
        match &config.anthropic_api_key {
            Some(key) => {
                let llm = LlmClient::new(key.clone());
                info!("LLM client initialized (model: {})", llm_client::MODEL);
                (
                    Arc::new(LlmExtractor::new(llm.clone())),
                    Arc::new(LlmScorer::new(llm)),
                )
            }
            None => {
                info!("No LLM key configured; using rule-based extraction and keyword scoring");
                (Arc::new(RuleBasedExtractor), Arc::new(KeywordScorer))
            }
        };

    let state = AppState {
        cache,
        extractor,
        scorer,
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
