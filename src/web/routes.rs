//! Public page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, landing_handler};
use axum::{Router, routing::get};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET /`       - Home page listing every generated page
/// - `GET /{slug}` - Generated landing page, or redirect home for unknown slugs
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/{slug}", get(landing_handler))
}
