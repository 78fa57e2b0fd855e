//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Local;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service liveness and storage status.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2026-08-07T10:15:00+02:00",
///   "config_file": "homelab_services.json",
///   "config_exists": true
/// }
/// ```
///
/// `config_exists` is `false` until the first successful save creates the
/// document.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Local::now().to_rfc3339(),
        config_file: state.config_file.display().to_string(),
        config_exists: state.catalog.document_exists(),
    })
}
