//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::domain::entities::LandingPage;
use crate::state::AppState;

/// Template for a generated landing page.
///
/// Renders `templates/landing.html` with the page head metadata, the intro,
/// local and FAQ sections, and the related-pages list. Empty sections are
/// omitted by the template.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub page: LandingPage,
}

/// Renders the landing page for a slug.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Not Found
///
/// Most paths reaching this route are not taxonomy pages. They are answered
/// with `307 Temporary Redirect` to the home page rather than an error page.
pub async fn landing_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Response {
    let service = &state.page_service;

    match service.resolve(&slug) {
        Some(entry) => {
            metrics::counter!("seo_pages_rendered_total", "kind" => entry.kind.as_str())
                .increment(1);

            LandingTemplate {
                page: service.render_entry(entry),
            }
            .into_response()
        }
        None => {
            debug!(%slug, "Unknown landing page, redirecting home");
            metrics::counter!("seo_pages_not_found_total").increment(1);

            Redirect::temporary("/").into_response()
        }
    }
}
