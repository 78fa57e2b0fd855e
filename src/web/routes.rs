//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{favicon_handler, index_handler};
use axum::{Router, routing::get};

/// HTML-facing routes.
///
/// # Endpoints
///
/// - `GET /`            - Dashboard landing page
/// - `GET /favicon.ico` - Empty 204 response
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/favicon.ico", get(favicon_handler))
}
