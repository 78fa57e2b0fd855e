//! Handlers for service collection endpoints (list, save, delete, reorder).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::api::dto::services::{
    MessageResponse, ReorderServicesRequest, SaveServicesRequest, SaveServicesResponse,
    ServicesResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full service collection in stored order.
///
/// # Endpoint
///
/// `GET /api/services`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "services": [{"name": "Grafana", "url": "http://grafana.local", "description": "", "column": 0}],
///   "count": 1
/// }
/// ```
pub async fn list_services_handler(State(state): State<AppState>) -> Json<ServicesResponse> {
    let services = state.catalog.list().await;
    let count = services.len();

    Json(ServicesResponse {
        success: true,
        services,
        count,
    })
}

/// Replaces the entire collection after per-record validation.
///
/// # Endpoint
///
/// `POST /api/services`
///
/// # Validation
///
/// Every record must have a non-empty `name` and `url` after trimming;
/// the first violation rejects the whole batch with a message naming the
/// record's 1-based position and field. `column` is clamped into `[0, 2]`
/// and `description` defaulted to the empty string.
///
/// # Errors
///
/// Returns 400 on a missing body or missing `services` key, 400 with the
/// field-specific message on validation failure, and 500 when the save fails.
pub async fn save_services_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveServicesRequest>, JsonRejection>,
) -> Result<Json<SaveServicesResponse>, AppError> {
    let Ok(Json(payload)) = payload else {
        return Err(AppError::bad_request("Invalid request data"));
    };

    let count = state.catalog.replace_all(payload.services).await?;

    Ok(Json(SaveServicesResponse {
        success: true,
        message: "Services saved successfully".to_string(),
        count,
    }))
}

/// Deletes the service at the given position.
///
/// # Endpoint
///
/// `DELETE /api/services/{index}`
///
/// Indices are positional: deleting shifts every later record one slot
/// down. The parameter is signed so that negative indices answer with the
/// same not-found error as past-the-end ones.
///
/// # Errors
///
/// Returns 404 when `index` is outside `[0, len)` and 500 when the save of
/// the remaining collection fails.
pub async fn delete_service_handler(
    Path(index): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let removed = state.catalog.delete(index).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: format!("Service \"{}\" deleted successfully", removed.name),
    }))
}

/// Replaces the entire collection without validation (drag-and-drop reorder).
///
/// # Endpoint
///
/// `POST /api/services/reorder`
///
/// The supplied sequence is persisted as-is: no trimming, no rejection, no
/// column clamping.
///
/// # Errors
///
/// Returns 400 on a missing body or missing `services` key and 500 when the
/// save fails.
pub async fn reorder_services_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReorderServicesRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Ok(Json(payload)) = payload else {
        return Err(AppError::bad_request("Invalid request data"));
    };

    state.catalog.reorder(payload.services).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Services reordered successfully".to_string(),
    }))
}
