//! # Homelab Dashboard
//!
//! A small dashboard service for homelab bookmarks, backed by a single JSON
//! file with automatic timestamped backups on every write.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the storage trait
//! - **Application Layer** ([`application`]) - Validation and collection operations
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file store with backup rotation
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered landing page
//!
//! ## Storage Model
//!
//! The full collection lives in one pretty-printed JSON document. Every
//! save renames the previous version aside as a timestamped automatic
//! backup and keeps the five most recent; manual backups are copies and are
//! retained indefinitely. Reads never fail: a missing or unreadable
//! document degrades to an empty collection.
//!
//! Deployment is single-process and single-writer. Concurrent writers race
//! as load-modify-save with last-write-wins; there is no locking and no
//! merge.
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional
//! export CONFIG_FILE="homelab_services.json"
//! export LISTEN="0.0.0.0:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BackupService, CatalogService};
    pub use crate::domain::entities::{BackupEntry, Service, ServiceDocument, ServiceDraft};
    pub use crate::domain::repositories::{ServiceStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonServiceStore;
    pub use crate::state::AppState;
}
