//! API route configuration.

use crate::api::handlers::{
    create_backup_handler, delete_service_handler, health_handler, list_backups_handler,
    list_services_handler, reorder_services_handler, save_services_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /services`          - List the stored collection
/// - `POST   /services`          - Replace the collection (validated)
/// - `DELETE /services/{index}`  - Delete the service at a position
/// - `POST   /services/reorder`  - Replace the collection as-is (unvalidated)
/// - `GET    /health`            - Liveness and document status
/// - `POST   /backup`            - Create a manual backup
/// - `GET    /backups`           - List backup files
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/services",
            get(list_services_handler).post(save_services_handler),
        )
        .route("/services/{index}", delete(delete_service_handler))
        .route("/services/reorder", post(reorder_services_handler))
        .route("/health", get(health_handler))
        .route("/backup", post(create_backup_handler))
        .route("/backups", get(list_backups_handler))
}
