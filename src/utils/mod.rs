//! Utility functions shared across layers.
//!
//! - [`slug`] - Slug derivation and validation

pub mod slug;
