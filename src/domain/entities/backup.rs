//! Backup metadata entity.

/// Metadata for a single backup file sitting next to the live document.
#[derive(Debug, Clone, PartialEq)]
pub struct BackupEntry {
    /// File name, e.g. `homelab_services.json.backup.20260807_121530`.
    pub filename: String,
    /// Last-modified timestamp, ISO-8601.
    pub created: String,
    /// File size in bytes.
    pub size: u64,
}
