//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod pages;
pub mod sitemap;

pub use health::health_handler;
pub use pages::{list_pages_handler, page_handler, related_handler};
pub use sitemap::sitemap_handler;
