//! Handlers for page listing, page detail and related links.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::pages::{PageListResponse, RelatedQuery, RelatedResponse};
use crate::domain::entities::LandingPage;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every generated page in enumeration order.
///
/// # Endpoint
///
/// `GET /api/pages`
///
/// # Response
///
/// ```json
/// {
///   "total": 14,
///   "items": [
///     {
///       "slug": "geracao-de-leads-b2b-praia-grande",
///       "kind": "city",
///       "title": "Geração de Leads B2B em Praia Grande | LeadRadar",
///       "label": "Leads B2B em Praia Grande",
///       "url": "https://www.leadradar.com.br/geracao-de-leads-b2b-praia-grande"
///     }
///   ]
/// }
/// ```
pub async fn list_pages_handler(State(state): State<AppState>) -> Json<PageListResponse> {
    let items = state.page_service.summaries();

    Json(PageListResponse {
        total: items.len(),
        items,
    })
}

/// Returns the full generated content of one page.
///
/// # Endpoint
///
/// `GET /api/pages/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if the slug is not a generated page.
pub async fn page_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LandingPage>, AppError> {
    state
        .page_service
        .render(&slug)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Page not found", json!({ "slug": slug })))
}

/// Returns the cross-links of one page.
///
/// # Endpoint
///
/// `GET /api/pages/{slug}/related`
///
/// # Query Parameters
///
/// - `limit` (optional): Maximum number of links (default: configured limit, range: 1-50)
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is not a number or is out of range.
/// Returns 404 Not Found if the slug is not a generated page.
pub async fn related_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    query: Result<Query<RelatedQuery>, QueryRejection>,
) -> Result<Json<RelatedResponse>, AppError> {
    let Query(params) = query?;
    params.validate()?;

    let limit = params
        .limit
        .unwrap_or_else(|| state.page_service.related_limit());

    let items = state
        .page_service
        .related_links(&slug, limit)
        .ok_or_else(|| AppError::not_found("Page not found", json!({ "slug": slug })))?;

    Ok(Json(RelatedResponse { slug, limit, items }))
}
