//! Shared application state injected into all handlers.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::{BackupService, CatalogService};
use crate::domain::repositories::ServiceStore;

/// Cloneable handle to the application services.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub backups: Arc<BackupService>,
    /// Path of the live document, reported by the health endpoint.
    pub config_file: PathBuf,
}

impl AppState {
    /// Builds the state from a store and the configured document path.
    pub fn new(store: Arc<dyn ServiceStore>, config_file: PathBuf) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(store.clone())),
            backups: Arc::new(BackupService::new(store)),
            config_file,
        }
    }
}
