//! API route configuration.

use crate::api::handlers::{list_pages_handler, page_handler, related_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only JSON API over the generated pages.
///
/// # Endpoints
///
/// - `GET /pages`                 - List every generated page
/// - `GET /pages/{slug}`          - Full content of one page
/// - `GET /pages/{slug}/related`  - Cross-links of one page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pages", get(list_pages_handler))
        .route("/pages/{slug}", get(page_handler))
        .route("/pages/{slug}/related", get(related_handler))
}
