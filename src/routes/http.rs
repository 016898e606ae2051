// GET handlers: banner, version

use axum::response::IntoResponse;

pub(super) const NAME: &str = env!("CARGO_PKG_NAME");
pub(super) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GET / — plain-text banner.
pub(super) async fn root_handler() -> impl IntoResponse {
    format!("{} {} - MCP registry analytics", NAME, VERSION)
}

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}
