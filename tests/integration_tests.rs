// Integration tests: HTTP endpoints over a temp CSV

mod common;

use axum_test::TestServer;
use common::{HEADER, TWO_DAY_CSV, write_csv};
use registry_analytics::config::AppConfig;
use registry_analytics::models::{ChartView, Granularity, ServerType, SummaryStats};
use registry_analytics::routes;
use registry_analytics::snapshot_repo::SnapshotRepo;
use std::path::Path;
use std::sync::Arc;

const TEST_CONFIG: &str = r#"
[server]
port = 8080
host = "0.0.0.0"

[data]
path = "data/test.csv"
"#;

fn test_server(csv_path: &Path) -> TestServer {
    let config = AppConfig::load_from_str(TEST_CONFIG).unwrap();
    let app = routes::app(Arc::new(SnapshotRepo::new(csv_path)), config);
    TestServer::new(app)
}

#[tokio::test]
async fn test_root_endpoint() {
    let (_dir, path) = write_csv(TWO_DAY_CSV);
    let server = test_server(&path);
    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().starts_with("registry-analytics"));
}

#[tokio::test]
async fn test_version_endpoint() {
    let (_dir, path) = write_csv(TWO_DAY_CSV);
    let server = test_server(&path);
    let response = server.get("/version").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(
        json.get("name").and_then(|v| v.as_str()),
        Some("registry-analytics")
    );
    assert!(json.get("version").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_series_endpoint() {
    let (_dir, path) = write_csv(TWO_DAY_CSV);
    let server = test_server(&path);
    let response = server.get("/api/series").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["count"], 3);
    assert_eq!(json["startTimestamp"], "2025-10-01T00:00:00Z");
    assert_eq!(json["snapshots"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_series_endpoint_missing_file_is_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    let server = test_server(&dir.path().join("absent.csv"));
    let response = server.get("/api/series").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["count"], 0);
    assert_eq!(json["endTimestamp"], "");
}

#[tokio::test]
async fn test_chart_endpoint_uses_config_defaults() {
    let (_dir, path) = write_csv(TWO_DAY_CSV);
    let server = test_server(&path);
    let view: ChartView = server.get("/api/chart").await.json();
    assert_eq!(view.granularity, Granularity::Daily);
    assert_eq!(view.server_type, ServerType::All);
    assert_eq!(view.points.len(), 2);
    assert_eq!(view.points[0].total, 52);
}

#[tokio::test]
async fn test_chart_endpoint_with_query() {
    let (_dir, path) = write_csv(TWO_DAY_CSV);
    let server = test_server(&path);
    let response = server
        .get("/api/chart")
        .add_query_param("granularity", "hourly")
        .add_query_param("serverType", "remote")
        .add_query_param("startDate", "2025-10-01")
        .add_query_param("endDate", "2025-10-01")
        .await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["granularity"], "hourly");
    assert_eq!(json["serverType"], "remote");
    assert_eq!(json["points"][0]["label"], "2025-10-01 00:00");
    assert_eq!(json["points"][0]["total"], 20);
    assert_eq!(json["points"][1]["total"], 21);
    assert_eq!(json["points"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["flags"]["showTotal"], false);
    assert_eq!(json["flags"]["showRemote"], true);
    assert_eq!(json["stats"]["dataPoints"], 2);
}

#[tokio::test]
async fn test_chart_endpoint_unknown_selectors_fall_back() {
    let (_dir, path) = write_csv(TWO_DAY_CSV);
    let server = test_server(&path);
    let response = server
        .get("/api/chart")
        .add_query_param("granularity", "fortnightly")
        .add_query_param("serverType", "hybrid")
        .await;
    response.assert_status_ok();
    let view: ChartView = response.json();
    assert_eq!(view.granularity, Granularity::Hourly);
    assert_eq!(view.server_type, ServerType::All);
    assert_eq!(view.points.len(), 3);
}

#[tokio::test]
async fn test_stats_endpoint() {
    let csv = format!(
        "{}\n2025-10-01T00:00:00Z,0,0,0\n2025-10-02T00:00:00Z,10,6,5\n2025-10-03T00:00:00Z,12,7,6",
        HEADER
    );
    let (_dir, path) = write_csv(&csv);
    let server = test_server(&path);

    let stats: SummaryStats = server.get("/api/stats").await.json();
    assert_eq!(stats.current_total, 12);
    assert_eq!(stats.growth, 12);
    assert_eq!(stats.data_points, 3);

    let stats: SummaryStats = server
        .get("/api/stats")
        .add_query_param("endDate", "2025-10-01")
        .await
        .json();
    assert_eq!(stats.current_total, 0);
    assert_eq!(stats.local_share_percent, 0);
}

#[tokio::test]
async fn test_unreadable_source_returns_500() {
    let dir = tempfile::TempDir::new().unwrap();
    let server = test_server(dir.path());
    let response = server.get("/api/series").await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = response.json();
    assert!(json["error"].as_str().is_some());
}
