//! HTML template rendering handlers for public landing pages.

mod index;
mod landing;

pub use index::index_handler;
pub use landing::landing_handler;
