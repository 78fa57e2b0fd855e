#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use homelab_dashboard::api::routes::api_routes;
use homelab_dashboard::infrastructure::persistence::JsonServiceStore;
use homelab_dashboard::state::AppState;
use tempfile::TempDir;

/// Builds an [`AppState`] over a store rooted in a fresh temporary
/// directory. The returned [`TempDir`] must be kept alive for the duration
/// of the test.
pub fn create_test_state() -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let config_file = dir.path().join("homelab_services.json");
    let store = Arc::new(JsonServiceStore::new(&config_file));

    (AppState::new(store, config_file), dir)
}

/// Test server with the full API mounted under `/api`.
pub fn make_server() -> (TestServer, TempDir) {
    let (state, dir) = create_test_state();
    let app = Router::new().nest("/api", api_routes()).with_state(state);

    (TestServer::new(app).unwrap(), dir)
}

/// Path of the live document inside the test directory.
pub fn document_path(dir: &TempDir) -> PathBuf {
    dir.path().join("homelab_services.json")
}

/// Names of automatic backup files currently in the test directory.
pub fn automatic_backups(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.contains(".backup."))
        .collect();
    names.sort();
    names
}

/// Names of manual backup files currently in the test directory.
pub fn manual_backups(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.contains(".manual."))
        .collect();
    names.sort();
    names
}

/// Writes a pre-stamped automatic backup file, for retention tests that
/// must not depend on wall-clock seconds.
pub fn seed_automatic_backup(dir: &TempDir, stamp: &str) {
    let name = format!("homelab_services.json.backup.{stamp}");
    std::fs::write(dir.path().join(name), "{}").unwrap();
}
