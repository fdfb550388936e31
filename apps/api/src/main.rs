mod config;
mod errors;
mod models;
mod narrative;
mod roadmap;
mod routes;
mod session;
mod state;
mod upstream;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting mentor API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        auth = %config.endpoints.auth,
        career = %config.endpoints.career,
        evaluation = %config.endpoints.evaluation,
        chat = %config.endpoints.chat,
        network = %config.endpoints.network,
        "Upstream services"
    );
    if config.gnews_api_key.is_none() {
        info!("GNEWS_API_KEY not set; /api/v1/news will answer 503");
    }
    if config.adzuna.is_none() {
        info!("ADZUNA_APP_ID/ADZUNA_APP_KEY not set; /api/v1/jobs will answer 503");
    }

    let state = AppState::new(config.clone())?;
    info!("Proficiency fallback: {:?}", config.proficiency_fallback);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
