//! Permissive cross-origin middleware.

use axum::http::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS middleware applied to every response.
///
/// Allows any origin, the HTTP methods the API exposes, and the
/// `Content-Type` / `Authorization` request headers. The dashboard is meant
/// for a trusted single-user network, so the policy is intentionally open.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}
