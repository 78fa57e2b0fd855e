//! Application error type and HTTP error envelope.
//!
//! Every error response is rendered as `{"success": false, "error": "..."}`
//! with the status code carrying the outcome class. Storage detail is logged
//! server-side and never leaks into the envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body of every error response.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

/// Application-level error mapped onto an HTTP status class.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Malformed or missing request fields → 400.
    Validation(String),
    /// Addressed record or document does not exist → 404.
    NotFound(String),
    /// Storage or other unexpected failure → 500, generic message.
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The message carried in the `error` field of the envelope.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::NotFound(m) | Self::Internal(m) => m,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let body = ErrorBody {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}
