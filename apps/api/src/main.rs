mod catalog;
mod config;
mod errors;
mod matching;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::loader::load_catalog;
use crate::catalog::resources::ResourceMap;
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

    info!("Starting Readiness API v{}", env!("CARGO_PKG_VERSION"));

    // Catalog is loaded once; a missing or malformed file aborts startup.
    let catalog = load_catalog(&config.catalog_path)?;

    let resources = ResourceMap::builtin();
    info!("Resource map: {} curated links", resources.len());

    let matcher = config.skill_matcher.build();
    info!("Skill matcher: {}", matcher.backend());

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        resources: Arc::new(resources),
        matcher,
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
