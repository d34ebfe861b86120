//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{PageCatalog, PageService};

/// Application state shared across request handlers.
///
/// Holds only read-only data, so cloning it per request is a reference-count bump.
#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<PageService>,
}

impl AppState {
    pub fn new(page_service: Arc<PageService>) -> Self {
        Self { page_service }
    }

    pub fn catalog(&self) -> &PageCatalog {
        self.page_service.catalog()
    }
}
