//! Handlers for backup endpoints (manual backup, listing).

use axum::{Json, extract::State};

use crate::api::dto::backups::{BackupCreatedResponse, BackupItem, BackupsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a manual backup of the live document.
///
/// # Endpoint
///
/// `POST /api/backup`
///
/// The document is copied (not renamed) to a `.manual.<timestamp>` sibling
/// file that is exempt from automatic retention pruning.
///
/// # Errors
///
/// Returns 404 when no document exists yet and 500 on copy failure.
pub async fn create_backup_handler(
    State(state): State<AppState>,
) -> Result<Json<BackupCreatedResponse>, AppError> {
    let backup_file = state.backups.create_manual_backup().await?;

    Ok(Json(BackupCreatedResponse {
        success: true,
        message: "Backup created successfully".to_string(),
        backup_file,
    }))
}

/// Lists all backup files next to the document.
///
/// # Endpoint
///
/// `GET /api/backups`
///
/// Includes both automatic and manual backups, sorted by filename
/// descending. Each entry reports filename, last-modified timestamp, and
/// size in bytes.
///
/// # Errors
///
/// Returns 500 when the storage directory cannot be read.
pub async fn list_backups_handler(
    State(state): State<AppState>,
) -> Result<Json<BackupsResponse>, AppError> {
    let backups = state.backups.list_backups().await?;

    Ok(Json(BackupsResponse {
        success: true,
        backups: backups.into_iter().map(BackupItem::from).collect(),
    }))
}
