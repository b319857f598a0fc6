mod blueprint;
mod config;
mod errors;
mod onboarding;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::blueprint::OptionCatalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting intake API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = load_catalog(&config)?;
    info!(
        "Option catalog {} loaded ({} option sets)",
        catalog.version,
        catalog.options.len()
    );

    let state = AppState::new(catalog);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the onboarding frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Uses `OPTION_CATALOG_PATH` when set, the built-in catalog otherwise.
fn load_catalog(config: &Config) -> Result<OptionCatalog> {
    match &config.option_catalog_path {
        Some(path) => {
            info!("Loading option catalog from {}", path.display());
            OptionCatalog::load(path)
        }
        None => Ok(OptionCatalog::builtin()),
    }
}
