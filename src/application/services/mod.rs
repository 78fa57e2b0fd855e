//! Business logic services for the application layer.

pub mod backup_service;
pub mod catalog_service;

pub use backup_service::BackupService;
pub use catalog_service::CatalogService;
