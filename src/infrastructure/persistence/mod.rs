//! File-backed store implementations.
//!
//! Concrete implementations of the domain storage traits over the local
//! filesystem.
//!
//! # Stores
//!
//! - [`JsonServiceStore`] - Single-document JSON persistence with backup rotation

pub mod json_service_store;

pub use json_service_store::{JsonServiceStore, MAX_AUTOMATIC_BACKUPS};
