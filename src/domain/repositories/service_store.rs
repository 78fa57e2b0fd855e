//! Store trait for durable service collection access.

use crate::domain::entities::{BackupEntry, Service};
use async_trait::async_trait;
use thiserror::Error;

/// Failures on the write and backup paths of a store.
///
/// The read path never fails; see [`ServiceStore::load`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The live document does not exist (manual backup of nothing).
    #[error("document not found")]
    NotFound,
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Store interface for the service collection.
///
/// A store owns a single document holding the full ordered collection, and
/// its sibling backup files. It is single-writer: concurrent saves race as
/// load-modify-save with last-write-wins, and callers are expected to run
/// one request at a time against a given path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonServiceStore`] - JSON file implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceStore: Send + Sync {
    /// Loads the full service collection.
    ///
    /// Never fails: a missing document, unreadable file, or malformed JSON
    /// all yield an empty collection, with the cause logged rather than
    /// surfaced. Entries missing a `column` field are defaulted to 0.
    async fn load(&self) -> Vec<Service>;

    /// Persists the given collection as the new document.
    ///
    /// If a document already exists it is renamed aside as an automatic
    /// backup first, and the automatic backup set is pruned to the 5 most
    /// recent. Partial effects (backup created, new document not written)
    /// are possible and not rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Serialize`] on failure;
    /// the caller must treat failure as "no durable change guaranteed".
    async fn save(&self, services: &[Service]) -> Result<(), StoreError>;

    /// Copies the live document to a manual backup file.
    ///
    /// Manual backups are never pruned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no document exists, otherwise
    /// [`StoreError::Io`] on copy failure.
    async fn create_manual_backup(&self) -> Result<String, StoreError>;

    /// Lists all backup files next to the document, newest-ish first.
    ///
    /// The order is a plain descending sort over filenames. Because the
    /// embedded timestamps are fixed-width this matches chronological order
    /// within one naming scheme, but `.backup.` and `.manual.` files
    /// interleave by prefix.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be read.
    async fn list_backups(&self) -> Result<Vec<BackupEntry>, StoreError>;

    /// Returns whether the live document currently exists on disk.
    fn document_exists(&self) -> bool;
}
