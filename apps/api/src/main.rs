mod config;
mod credit;
mod errors;
mod insurance;
mod llm_client;
mod planner;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::credit::scoring::{RuleBasedScorer, ScoreSource};
use crate::insurance::repository::InMemoryInsuranceDirectory;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing GEMINI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.log_level,
                &config.log_level
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting GenFi API v{} ({})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    // Initialize LLM client
    let llm = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_base_url.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize score source (rule-based; no trained model ships with the service)
    let score_source = Arc::new(RuleBasedScorer);
    info!("Score source: {:?}", score_source.kind());

    // Seed the in-memory AA directory
    let directory = Arc::new(InMemoryInsuranceDirectory::seeded());

    let state = AppState {
        config: config.clone(),
        llm: Arc::new(llm),
        score_source,
        directory,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the Flutter app has a fixed host

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
