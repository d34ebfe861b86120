//! Domain layer: page identities and the taxonomy they are enumerated from.
//!
//! # Architecture
//!
//! - [`entities`] - Page entry and generated content values
//! - [`taxonomy`] - Static cities/niches/neighborhoods and the enumeration rule
//!
//! # Design Principles
//!
//! - No I/O beyond optionally reading a taxonomy file
//! - No shared mutable state; every value is recomputed from the taxonomy
//! - Generation logic lives in [`crate::application`] and consumes these types

pub mod entities;
pub mod taxonomy;
