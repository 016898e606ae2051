// Config loading and validation tests

use registry_analytics::config::AppConfig;
use registry_analytics::models::{Granularity, ServerType};

const VALID_CONFIG: &str = r#"
[server]
port = 8080
host = "0.0.0.0"

[data]
path = "data/snapshots.csv"

[dashboard]
default_granularity = "weekly"
default_server_type = "remote"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.data.path, "data/snapshots.csv");
    assert_eq!(config.dashboard.default_granularity, Granularity::Weekly);
    assert_eq!(config.dashboard.default_server_type, ServerType::Remote);
}

#[test]
fn test_config_dashboard_section_is_optional() {
    let minimal = r#"
[server]
port = 8080
host = "127.0.0.1"

[data]
path = "snapshots.csv"
"#;
    let config = AppConfig::load_from_str(minimal).unwrap();
    assert_eq!(config.dashboard.default_granularity, Granularity::Daily);
    assert_eq!(config.dashboard.default_server_type, ServerType::All);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8080", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_empty_data_path() {
    let bad = VALID_CONFIG.replace("path = \"data/snapshots.csv\"", "path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("data.path"));
}

#[test]
fn test_config_rejects_unknown_granularity() {
    let bad = VALID_CONFIG.replace("\"weekly\"", "\"yearly\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_rejects_missing_section() {
    let bad = r#"
[server]
port = 8080
host = "0.0.0.0"
"#;
    assert!(AppConfig::load_from_str(bad).is_err());
}
