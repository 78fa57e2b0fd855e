//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with storage status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub config_file: String,
    pub config_exists: bool,
}
