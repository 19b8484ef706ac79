mod analysis;
mod config;
mod errors;
mod extraction;
mod routes;
mod spellcheck;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::allowlist::Allowlist;
use crate::config::Config;
use crate::routes::build_router;
use crate::spellcheck::{EditDistanceCorrector, SpellCorrector};
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

    info!("Starting Resume Lint API v{}", env!("CARGO_PKG_VERSION"));

    // Scratch directory for uploads; retention is the deployment's concern
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    info!("Upload directory: {}", config.upload_dir);

    let allowlist = Arc::new(Allowlist::new());
    let corrector = EditDistanceCorrector::new();
    info!(
        "Spell corrector initialized ({} dictionary entries, {} allowlisted terms)",
        corrector.len(),
        allowlist.len()
    );
    let corrector: Arc<dyn SpellCorrector> = Arc::new(corrector);

    let state = AppState {
        config: config.clone(),
        allowlist,
        corrector,
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
