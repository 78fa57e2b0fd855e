//! Service collection operations: validation, replacement, deletion, reorder.

use std::sync::Arc;

use crate::domain::entities::{Service, ServiceDraft};
use crate::domain::repositories::ServiceStore;
use crate::error::AppError;

/// Orchestrates collection operations over a [`ServiceStore`].
///
/// Every mutation is a full load-modify-save cycle against the shared
/// document. Records are addressed by position only; there is no stable
/// identifier, so a reorder changes what each index refers to.
pub struct CatalogService {
    store: Arc<dyn ServiceStore>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(store: Arc<dyn ServiceStore>) -> Self {
        Self { store }
    }

    /// Returns the full service collection in stored order.
    pub async fn list(&self) -> Vec<Service> {
        self.store.load().await
    }

    /// Validates and persists a full replacement of the collection.
    ///
    /// Records are checked in sequence order; the first record whose
    /// trimmed `name` (then `url`) is empty rejects the whole batch with a
    /// field-specific message using the record's 1-based position. Passing
    /// records get `column` clamped into `[0, 2]` and `description`
    /// defaulted to the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on the first offending record, or
    /// [`AppError::Internal`] when the save fails.
    pub async fn replace_all(&self, drafts: Vec<ServiceDraft>) -> Result<usize, AppError> {
        for (index, draft) in drafts.iter().enumerate() {
            if draft.name.trim().is_empty() {
                return Err(AppError::bad_request(format!(
                    "Service {}: name is required",
                    index + 1
                )));
            }
            if draft.url.trim().is_empty() {
                return Err(AppError::bad_request(format!(
                    "Service {}: url is required",
                    index + 1
                )));
            }
        }

        let services: Vec<Service> = drafts.into_iter().map(ServiceDraft::normalize).collect();

        self.store
            .save(&services)
            .await
            .map_err(|_| AppError::internal("Failed to save services"))?;

        Ok(services.len())
    }

    /// Removes the service at the given position and persists the rest.
    ///
    /// Returns the removed record so callers can name it in the response.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when `index` is negative or not less
    /// than the collection length, and [`AppError::Internal`] when the save
    /// fails. The collection is unchanged on either error.
    pub async fn delete(&self, index: i64) -> Result<Service, AppError> {
        let mut services = self.store.load().await;

        if index < 0 || index as usize >= services.len() {
            return Err(AppError::not_found("Service not found"));
        }

        let removed = services.remove(index as usize);

        self.store
            .save(&services)
            .await
            .map_err(|_| AppError::internal("Failed to delete service"))?;

        Ok(removed)
    }

    /// Persists the supplied sequence as-is.
    ///
    /// The reorder path is exempt from validation: nothing is trimmed,
    /// rejected, or clamped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the save fails.
    pub async fn reorder(&self, services: Vec<Service>) -> Result<(), AppError> {
        self.store
            .save(&services)
            .await
            .map_err(|_| AppError::internal("Failed to reorder services"))
    }

    /// Returns whether the live document exists on disk.
    pub fn document_exists(&self) -> bool {
        self.store.document_exists()
    }
}
