//! Handler for the XML sitemap.

use axum::{extract::State, http::header, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Serves the sitemap of every generated page.
///
/// # Endpoint
///
/// `GET /sitemap.xml`
///
/// The document lists the site root followed by every enumerated page under
/// the configured `BASE_URL`.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the sitemap template fails to render.
pub async fn sitemap_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let xml = state.page_service.sitemap_xml().map_err(|e| {
        AppError::internal("Failed to render sitemap", json!({ "reason": e.to_string() }))
    })?;

    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml))
}
