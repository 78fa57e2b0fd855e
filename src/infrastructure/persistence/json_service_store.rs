//! JSON file implementation of the service store.
//!
//! The collection is persisted as a single pretty-printed JSON document.
//! Every save renames the previous document aside as a timestamped
//! automatic backup before writing the replacement, then prunes the
//! automatic backup set down to the most recent five.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::domain::entities::{BackupEntry, Service, ServiceDocument};
use crate::domain::repositories::{ServiceStore, StoreError};

/// Number of automatic backups retained after each save.
pub const MAX_AUTOMATIC_BACKUPS: usize = 5;

/// File-backed store keeping the collection in one JSON document.
///
/// Backup files live next to the document and are named by appending
/// `.backup.<YYYYMMDD_HHMMSS>` (automatic, rename) or
/// `.manual.<YYYYMMDD_HHMMSS>` (manual, copy) to the document path.
/// Timestamps are local time at second resolution, zero-padded so that a
/// lexical sort over filenames is chronological within one scheme.
pub struct JsonServiceStore {
    path: PathBuf,
}

impl JsonServiceStore {
    /// Creates a store over the given document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the live document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component of the document, used as the backup prefix.
    fn document_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Directory holding the document and its backups.
    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Second-resolution local timestamp used in backup filenames.
    fn backup_stamp() -> String {
        Local::now().format("%Y%m%d_%H%M%S").to_string()
    }

    async fn read_document(&self) -> Result<ServiceDocument, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save_inner(&self, services: &[Service]) -> Result<(), StoreError> {
        if self.path.exists() {
            // Rename, not copy: the previous version moves aside atomically
            // at the filesystem level.
            let backup_path = format!("{}.backup.{}", self.path.display(), Self::backup_stamp());
            tokio::fs::rename(&self.path, &backup_path).await?;
            self.prune_automatic_backups().await?;
        }

        let document = ServiceDocument {
            services: services.to_vec(),
            last_updated: Local::now().to_rfc3339(),
        };

        let json = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Deletes all but the [`MAX_AUTOMATIC_BACKUPS`] most recent automatic
    /// backups. Manual backups are not counted or touched.
    async fn prune_automatic_backups(&self) -> Result<(), StoreError> {
        let prefix = format!("{}.backup.", self.document_name());

        let mut backups = Vec::new();
        let mut entries = tokio::fs::read_dir(self.dir()).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(&prefix) {
                backups.push(name);
            }
        }

        // Fixed-width timestamps: ascending lexical order is chronological.
        backups.sort();

        if backups.len() > MAX_AUTOMATIC_BACKUPS {
            for name in &backups[..backups.len() - MAX_AUTOMATIC_BACKUPS] {
                tokio::fs::remove_file(self.dir().join(name)).await?;
                tracing::debug!(backup = %name, "pruned automatic backup");
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ServiceStore for JsonServiceStore {
    async fn load(&self) -> Vec<Service> {
        if !self.path.exists() {
            return Vec::new();
        }

        match self.read_document().await {
            Ok(document) => document.services,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to load services, treating document as empty"
                );
                Vec::new()
            }
        }
    }

    async fn save(&self, services: &[Service]) -> Result<(), StoreError> {
        match self.save_inner(services).await {
            Ok(()) => {
                tracing::debug!(
                    path = %self.path.display(),
                    count = services.len(),
                    "saved service collection"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to save services"
                );
                Err(e)
            }
        }
    }

    async fn create_manual_backup(&self) -> Result<String, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound);
        }

        let backup_path = format!("{}.manual.{}", self.path.display(), Self::backup_stamp());
        tokio::fs::copy(&self.path, &backup_path).await?;
        tracing::info!(backup = %backup_path, "created manual backup");

        Ok(backup_path)
    }

    async fn list_backups(&self) -> Result<Vec<BackupEntry>, StoreError> {
        let document_name = self.document_name();
        let prefix = format!("{document_name}.");

        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(self.dir()).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(&prefix) && name != document_name {
                names.push(name);
            }
        }

        // Plain descending filename sort. Approximates most-recent-first,
        // with automatic and manual backups interleaved by prefix.
        names.sort_by(|a, b| b.cmp(a));

        let mut backups = Vec::with_capacity(names.len());
        for name in names {
            let metadata = tokio::fs::metadata(self.dir().join(&name)).await?;
            let modified = metadata.modified()?;
            backups.push(BackupEntry {
                filename: name,
                created: DateTime::<Local>::from(modified).to_rfc3339(),
                size: metadata.len(),
            });
        }

        Ok(backups)
    }

    fn document_exists(&self) -> bool {
        self.path.exists()
    }
}
