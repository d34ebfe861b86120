//! HTTP server initialization and runtime setup.
//!
//! Builds the page catalog, wires services into application state and runs
//! the Axum server until a shutdown signal arrives.

use crate::api::middleware::rate_limit;
use crate::application::services::{PageCatalog, PageService};
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds application state from configuration.
///
/// # Errors
///
/// Returns an error if the taxonomy cannot be loaded or `BASE_URL` is invalid.
pub fn build_state(config: &Config) -> Result<AppState> {
    let taxonomy = config.load_taxonomy()?;
    let catalog = Arc::new(PageCatalog::new(&taxonomy));
    let base_url = config.parsed_base_url()?;

    let page_service = Arc::new(PageService::new(catalog, base_url, config.related_limit));

    Ok(AppState::new(page_service))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Page catalog from the configured taxonomy
/// - Page service and shared state
/// - Rate limiter
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The taxonomy is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!("Serving {} generated pages", state.catalog().len());

    let limiter = rate_limit::layer(config.rate_limit_per_second, config.rate_limit_burst)?;
    let app = app_router(state, Some(limiter));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
