mod analysis;
mod assist;
mod config;
mod errors;
mod llm_client;
mod models;
mod proxy;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assist::dispatcher::Dispatcher;
use crate::assist::transport::{HttpTransport, Transport};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::manager::StorageManager;
use crate::storage::store::{KeyValueStore, MemoryStore, RedisStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Assist API v{}", env!("CARGO_PKG_VERSION"));

    // Gemini client for the proxy endpoint
    let llm = match &config.gemini_api_key {
        Some(key) => {
            let client = LlmClient::new(config.gemini_api_url.clone(), key.clone())?;
            info!("Gemini client initialized ({})", config.gemini_api_url);
            Some(client)
        }
        None => {
            warn!("GEMINI_API_KEY not set; /api/v1/ai will answer with an error");
            None
        }
    };

    // Dispatcher: remote endpoint when configured, local heuristics otherwise
    let dispatcher = match &config.ai_endpoint_url {
        Some(url) => {
            let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(
                url.clone(),
                config.ai_endpoint_key.clone(),
            )?);
            info!("AI endpoint: {url}");
            Dispatcher::new(Some(transport))
        }
        None => {
            info!("AI_ENDPOINT_URL not set; running in simulated mode");
            Dispatcher::simulated()
        }
    };

    let storage = StorageManager::new(build_store(&config).await);

    let state = AppState {
        llm,
        dispatcher: Arc::new(dispatcher),
        storage,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Redis when `REDIS_URL` is set, in-process memory otherwise.
/// A Redis that cannot be reached leaves storage unavailable rather than
/// failing startup.
async fn build_store(config: &Config) -> Option<Arc<dyn KeyValueStore>> {
    let Some(url) = &config.redis_url else {
        info!("REDIS_URL not set; storage is in-memory");
        return Some(Arc::new(MemoryStore::new()));
    };

    let connected = match redis::Client::open(url.as_str()) {
        Ok(client) => RedisStore::connect(&client).await,
        Err(e) => Err(e.into()),
    };

    match connected {
        Ok(store) => {
            info!("Redis storage connected");
            Some(Arc::new(store))
        }
        Err(e) => {
            warn!("Redis unavailable, storage disabled: {e}");
            None
        }
    }
}
