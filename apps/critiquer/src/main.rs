mod config;
mod critique;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod state;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GroqClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a bad PORT is fatal, a missing API key is not
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Critiquer v{}", env!("CARGO_PKG_VERSION"));

    // Without a key the server still runs so the page can explain what is missing
    let state = match config.api_key() {
        Ok(api_key) => {
            let client = GroqClient::new(api_key.to_string(), &config.groq_base_url)?;
            info!(
                "LLM client initialized (model: {}, endpoint: {})",
                llm_client::MODEL,
                config.groq_base_url
            );
            AppState::new(Arc::new(client))
        }
        Err(e) => {
            error!("{e} Analysis is disabled until the key is provided.");
            AppState::unconfigured(e)
        }
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
