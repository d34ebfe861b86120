//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::application::metadata::{site_description, site_title};
use crate::domain::entities::{PageKind, PageSummary};
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/index.html`: a "browse by city" listing of every
/// generated page grouped by kind.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub city_pages: Vec<PageSummary>,
    pub niche_pages: Vec<PageSummary>,
    pub neighborhood_pages: Vec<PageSummary>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut city_pages = Vec::new();
    let mut niche_pages = Vec::new();
    let mut neighborhood_pages = Vec::new();

    for summary in state.page_service.summaries() {
        match summary.kind {
            PageKind::City => city_pages.push(summary),
            PageKind::CityNiche => niche_pages.push(summary),
            PageKind::Neighborhood => neighborhood_pages.push(summary),
        }
    }

    IndexTemplate {
        title: site_title(),
        description: site_description(),
        canonical_url: state.page_service.home_url(),
        city_pages,
        niche_pages,
        neighborhood_pages,
    }
}
