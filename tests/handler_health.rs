mod common;

use serde_json::json;

#[tokio::test]
async fn test_health_before_first_save() {
    let (server, dir) = common::make_server();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["config_exists"], false);
    assert_eq!(
        json["config_file"],
        common::document_path(&dir).display().to_string()
    );
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_health_after_first_save() {
    let (server, _dir) = common::make_server();

    server
        .post("/api/services")
        .json(&json!({
            "services": [{"name": "NAS", "url": "http://nas.local"}]
        }))
        .await
        .assert_status_ok();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["config_exists"], true);
}
