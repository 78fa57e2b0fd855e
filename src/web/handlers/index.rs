//! Landing page and favicon handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};

/// Template for the dashboard landing page.
///
/// Renders `templates/index.html`, a single-page view that fetches the
/// collection from `/api/services` and groups it into three columns.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Renders the dashboard landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {}
}

/// Answers favicon requests with an empty body.
///
/// # Endpoint
///
/// `GET /favicon.ico`
///
/// Browsers request this unconditionally; a 204 keeps the access log free
/// of 404 noise.
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
