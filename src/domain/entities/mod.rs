//! Core domain entities of the landing-page engine.
//!
//! # Entity Types
//!
//! - [`PageEntry`] - Identity of one generatable page
//! - [`PageSubject`] - Exhaustive dispatch view of an entry, including the fallback case
//! - [`FaqItem`], [`RelatedLink`], [`LandingPage`], [`PageSummary`] - Generated content values
//!
//! Entities are immutable values without I/O; they are recomputed from the
//! taxonomy on demand.

pub mod content;
pub mod page_entry;

pub use content::{FaqItem, LandingPage, PageSummary, RelatedLink};
pub use page_entry::{PageEntry, PageKind, PageSubject};
