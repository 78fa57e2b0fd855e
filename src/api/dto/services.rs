//! DTOs for service collection endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Service, ServiceDraft};

/// Full-collection replacement request (validated path).
#[derive(Debug, Deserialize)]
pub struct SaveServicesRequest {
    pub services: Vec<ServiceDraft>,
}

/// Full-collection replacement request (reorder path, persisted as-is).
#[derive(Debug, Deserialize)]
pub struct ReorderServicesRequest {
    pub services: Vec<Service>,
}

/// Response listing the stored collection.
#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    pub success: bool,
    pub services: Vec<Service>,
    pub count: usize,
}

/// Response after a validated save.
#[derive(Debug, Serialize)]
pub struct SaveServicesResponse {
    pub success: bool,
    pub message: String,
    pub count: usize,
}

/// Generic success message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
