//! Handlers for the HTML-facing routes.

pub mod index;

pub use index::{favicon_handler, index_handler};
