//! HTTP server initialization and runtime setup.
//!
//! Handles store construction, first-startup document creation, and the
//! Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::ServiceStore;
use crate::infrastructure::persistence::JsonServiceStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The JSON file store at the configured path
/// - The document itself on first startup (empty collection)
/// - The Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The initial document cannot be written
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn ServiceStore> = Arc::new(JsonServiceStore::new(&config.config_file));

    if !store.document_exists() {
        store.save(&[]).await?;
        tracing::info!(
            path = %config.config_file.display(),
            "created document with empty collection"
        );
    }

    let state = AppState::new(store, config.config_file.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
