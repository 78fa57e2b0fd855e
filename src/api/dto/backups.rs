//! DTOs for backup endpoints.

use serde::Serialize;

use crate::domain::entities::BackupEntry;

/// Response after a manual backup was created.
#[derive(Debug, Serialize)]
pub struct BackupCreatedResponse {
    pub success: bool,
    pub message: String,
    pub backup_file: String,
}

/// Response listing all backup files.
#[derive(Debug, Serialize)]
pub struct BackupsResponse {
    pub success: bool,
    pub backups: Vec<BackupItem>,
}

/// One backup file with metadata.
#[derive(Debug, Serialize)]
pub struct BackupItem {
    pub filename: String,
    pub created: String,
    pub size: u64,
}

impl From<BackupEntry> for BackupItem {
    fn from(entry: BackupEntry) -> Self {
        Self {
            filename: entry.filename,
            created: entry.created,
            size: entry.size,
        }
    }
}
