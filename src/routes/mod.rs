// HTTP routes: JSON for the dashboard front end

mod api;
mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::snapshot_repo::SnapshotRepo;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) snapshot_repo: Arc<SnapshotRepo>,
    pub(crate) config: AppConfig,
}

pub fn app(snapshot_repo: Arc<SnapshotRepo>, config: AppConfig) -> Router {
    let state = AppState {
        snapshot_repo,
        config,
    };
    Router::new()
        .route("/", get(http::root_handler)) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/series", get(api::series_handler)) // GET /api/series
        .route("/api/chart", get(api::chart_handler)) // GET /api/chart
        .route("/api/stats", get(api::stats_handler)) // GET /api/stats
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
