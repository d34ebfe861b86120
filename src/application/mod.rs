//! Application layer: page generation logic and the services built on it.
//!
//! The generators are pure functions of a [`crate::domain::entities::PageEntry`]:
//!
//! - [`metadata`] - Title and meta description
//! - [`content`] - Intro, local and FAQ blocks
//! - [`related`] - Internal-link graph between pages
//!
//! [`services`] wraps them around an enumerated catalog for request handlers,
//! the CLI and sitemap generation.

pub mod content;
pub mod metadata;
pub mod related;
pub mod services;
