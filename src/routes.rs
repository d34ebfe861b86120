//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Home page (HTML)
//! - `GET  /{slug}`       - Generated landing page (HTML), unknown slugs redirect home
//! - `GET  /health`       - Health check
//! - `GET  /sitemap.xml`  - Sitemap of every generated page
//! - `/api/*`             - Read-only JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (optional, needs connect info)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, sitemap_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower::Layer;
use tower_governor::GovernorLayer;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Rate limiting layer accepted by [`app_router`].
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - per-IP limiter; when set, the router must be served with
///   `into_make_service_with_connect_info::<SocketAddr>()`
pub fn app_router(state: AppState, rate_limit: Option<RateLimitLayer>) -> NormalizePath<Router> {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::public_routes())
        .with_state(state);

    if let Some(limiter) = rate_limit {
        router = router.layer(limiter);
    }

    let router = router.layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
