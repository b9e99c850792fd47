mod config;
mod errors;
mod layout;
mod models;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::StyleSet;
use crate::render::pdf::load_fonts;
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

    info!("Starting Resume Generator API v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the style catalog once; shared read-only by every render.
    let style = Arc::new(StyleSet::default());

    // Fonts are embedded into each generated document. A missing font
    // directory fails startup, not individual requests.
    let fonts = load_fonts(&config.font_dir, &config.font_name)?;
    info!(
        "Loaded font family '{}' from {}",
        config.font_name, config.font_dir
    );

    let state = AppState {
        config: config.clone(),
        style,
        fonts,
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
