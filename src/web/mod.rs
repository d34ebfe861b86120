//! Server-rendered HTML layer for generated landing pages.
//!
//! Uses Askama templates from `templates/`. Head metadata is rendered per
//! response, so no document state outlives a request.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Public page route configuration

pub mod handlers;
pub mod routes;
