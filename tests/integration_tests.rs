// Integration tests: HTTP endpoints over the assembled app

mod common;

use axum_test::TestServer;
use std::sync::Arc;

fn test_app(dir: &tempfile::TempDir) -> axum::Router {
    let profile_path = common::write_profile(dir.path(), common::SAMPLE_PROFILE);
    let thermal_path = common::write_thermal(dir.path(), "48765\n");
    let assembler = Arc::new(common::test_assembler(&profile_path, &thermal_path));
    solarstation::routes::app(assembler)
}

#[tokio::test]
async fn test_root_endpoint() {
    let dir = tempfile::TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir)).unwrap();
    let response = server.get("/").await;
    response.assert_status_ok();
    response.assert_text("Solar station dashboard");
}

#[tokio::test]
async fn test_version_endpoint() {
    let dir = tempfile::TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir)).unwrap();
    let response = server.get("/version").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(
        json.get("name").and_then(|v| v.as_str()),
        Some("solarstation")
    );
    assert!(json.get("version").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_snapshot_endpoint_returns_full_shape() {
    let dir = tempfile::TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir)).unwrap();
    let response = server.get("/api/snapshot").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();

    // Every metric key is present: populated or explicitly null.
    for key in [
        "uptime",
        "ipAddress",
        "cpuLoadPercent",
        "memory",
        "disk",
        "cpuTemperatureC",
        "deviceConfig",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(json["cpuTemperatureC"], 48.77);
    assert_eq!(json["ipAddress"], "127.0.0.1");
    assert_eq!(json["deviceConfig"]["pi-solar-charger"], "Victron BlueSolar");
    assert!(json["uptime"].is_object());
}

#[tokio::test]
async fn test_snapshot_endpoint_without_profile_still_renders() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing_profile = dir.path().join("absent.conf");
    let missing_thermal = dir.path().join("absent-thermal");
    let assembler = Arc::new(common::test_assembler(&missing_profile, &missing_thermal));
    let server = TestServer::new(solarstation::routes::app(assembler)).unwrap();

    let response = server.get("/api/snapshot").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["deviceConfig"], serde_json::json!({}));
    assert!(json["cpuTemperatureC"].is_null());
    assert!(json["uptime"].is_object());
}

#[tokio::test]
async fn test_profile_endpoint() {
    let dir = tempfile::TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir)).unwrap();
    let response = server.get("/api/profile").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["pi-solar-charger"], "Victron BlueSolar");
    assert_eq!(json["pi-solar-pvtype"], "60W=PolyX");
}
