//! Manual backup creation and backup listing.

use std::sync::Arc;

use crate::domain::entities::BackupEntry;
use crate::domain::repositories::{ServiceStore, StoreError};
use crate::error::AppError;

/// Backup operations over a [`ServiceStore`].
pub struct BackupService {
    store: Arc<dyn ServiceStore>,
}

impl BackupService {
    /// Creates a new backup service.
    pub fn new(store: Arc<dyn ServiceStore>) -> Self {
        Self { store }
    }

    /// Copies the live document to a timestamped manual backup file.
    ///
    /// Returns the backup file path. Manual backups are excluded from the
    /// automatic retention pruning and kept indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no document exists, and
    /// [`AppError::Internal`] on copy failure.
    pub async fn create_manual_backup(&self) -> Result<String, AppError> {
        match self.store.create_manual_backup().await {
            Ok(backup_file) => Ok(backup_file),
            Err(StoreError::NotFound) => {
                Err(AppError::not_found("No configuration file to backup"))
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create manual backup");
                Err(AppError::internal("Failed to create backup"))
            }
        }
    }

    /// Lists all backups next to the document, sorted filename-descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the directory cannot be read.
    pub async fn list_backups(&self) -> Result<Vec<BackupEntry>, AppError> {
        self.store.list_backups().await.map_err(|e| {
            tracing::error!(error = %e, "failed to list backups");
            AppError::internal("Failed to list backups")
        })
    }
}
