//! Services over the page catalog.

pub mod catalog_service;
pub mod page_service;

pub use catalog_service::{PageCatalog, enumerate_entries, related_entries_for, resolve_entry};
pub use page_service::PageService;
