//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod backups;
pub mod health;
pub mod services;

pub use backups::{create_backup_handler, list_backups_handler};
pub use health::health_handler;
pub use services::{
    delete_service_handler, list_services_handler, reorder_services_handler, save_services_handler,
};
