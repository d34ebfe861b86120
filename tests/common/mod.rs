#![allow(dead_code)]

use seo_pages::application::related::DEFAULT_RELATED_LIMIT;
use seo_pages::application::services::{PageCatalog, PageService};
use seo_pages::domain::taxonomy::{Place, Taxonomy};
use seo_pages::state::AppState;
use std::sync::Arc;
use url::Url;

pub const BASE_URL: &str = "https://example.com";

pub fn create_state_for(taxonomy: &Taxonomy) -> AppState {
    let catalog = Arc::new(PageCatalog::new(taxonomy));
    let service = PageService::new(
        catalog,
        Url::parse(BASE_URL).unwrap(),
        DEFAULT_RELATED_LIMIT,
    );
    AppState::new(Arc::new(service))
}

pub fn create_test_state() -> AppState {
    create_state_for(&Taxonomy::reference())
}

pub fn taxonomy_with_neighborhoods() -> Taxonomy {
    let mut taxonomy = Taxonomy::reference();
    taxonomy.neighborhoods = vec![
        Place::new("Gonzaga", Some("SP")),
        Place::new("Boqueirão", Some("SP")),
    ];
    taxonomy
}

pub fn empty_taxonomy() -> Taxonomy {
    Taxonomy {
        cities: Vec::new(),
        niches: Vec::new(),
        neighborhoods: Vec::new(),
        combination_cap: 3,
    }
}
