//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET /`            - Dashboard landing page
//! - `GET /favicon.ico` - Empty 204 response
//! - `/api/*`           - REST API
//! - anything else      - 404 JSON envelope
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin headers on every response
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::error::AppError;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::routes())
        .nest("/api", api::routes::api_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Catch-all for unmatched routes, keeping the JSON error envelope.
async fn fallback_handler() -> AppError {
    AppError::not_found("Endpoint not found")
}
