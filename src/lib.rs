//! # SEO Pages
//!
//! Programmatic landing-page engine: enumerates a static taxonomy of cities,
//! niches and neighborhoods, derives stable URL slugs, synthesizes per-page
//! metadata and body content, and computes a bounded internal-link graph.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Page entries and the taxonomy
//! - **Application Layer** ([`application`]) - Pure generators and catalog services
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered landing pages
//!
//! The engine itself is synchronous and stateless: every page is recomputed
//! from the taxonomy, and the same slug always produces the same page.
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://www.leadradar.com.br"
//! cargo run
//! ```
//!
//! ## Library Use
//!
//! ```ignore
//! use seo_pages::prelude::*;
//!
//! let catalog = PageCatalog::reference();
//! let entry = catalog.resolve("geracao-de-leads-b2b-santos").unwrap();
//! assert_eq!(page_title(entry), "Geração de Leads B2B em Santos | LeadRadar");
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports the engine surface so library users and integration tests can
/// import everything from one place.
pub mod prelude {
    pub use crate::application::content::{faq_block, intro_block, local_block};
    pub use crate::application::metadata::{page_description, page_title};
    pub use crate::application::related::{DEFAULT_RELATED_LIMIT, related_entries};
    pub use crate::application::services::{
        PageCatalog, PageService, enumerate_entries, related_entries_for, resolve_entry,
    };
    pub use crate::domain::entities::{
        FaqItem, LandingPage, PageEntry, PageKind, PageSubject, PageSummary, RelatedLink,
    };
    pub use crate::domain::taxonomy::{CatalogError, Place, Taxonomy};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::slug::{
        build_city_niche_slug, build_city_slug, build_neighborhood_slug, slugify,
    };
}
