// GET handlers: series, chart, stats. Each request re-reads the CSV.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::warn;

use super::AppState;
use crate::dashboard::{self, ChartQuery};
use crate::models::{ChartView, Granularity, ServerType, SnapshotSeries, SummaryStats};

/// Raw query string; selectors stay strings so unknown values can fall back.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ChartParams {
    granularity: Option<String>,
    server_type: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RangeParams {
    start_date: Option<String>,
    end_date: Option<String>,
}

/// Load failure other than a missing file; rendered as 500 with a JSON body.
pub(super) struct ApiError(anyhow::Error);

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

impl ChartParams {
    fn into_query(self, state: &AppState) -> ChartQuery {
        let defaults = &state.config.dashboard;
        let granularity = match self.granularity.as_deref() {
            None | Some("") => defaults.default_granularity,
            Some(raw) => raw.parse::<Granularity>().unwrap_or_else(|e| {
                warn!(error = %e, "falling back to unaggregated data");
                Granularity::Hourly
            }),
        };
        let server_type = match self.server_type.as_deref() {
            None | Some("") => defaults.default_server_type,
            Some(raw) => raw.parse::<ServerType>().unwrap_or_else(|e| {
                warn!(error = %e, "falling back to all servers");
                ServerType::All
            }),
        };
        ChartQuery {
            granularity,
            server_type,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// GET /api/series — every snapshot plus bounds.
pub(super) async fn series_handler(
    State(state): State<AppState>,
) -> Result<Json<SnapshotSeries>, ApiError> {
    Ok(Json(state.snapshot_repo.load()?))
}

/// GET /api/chart?granularity=&serverType=&startDate=&endDate=
pub(super) async fn chart_handler(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> Result<Json<ChartView>, ApiError> {
    let series = state.snapshot_repo.load()?;
    let query = params.into_query(&state);
    Ok(Json(dashboard::build_chart(&series, &query)))
}

/// GET /api/stats?startDate=&endDate=
pub(super) async fn stats_handler(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<SummaryStats>, ApiError> {
    let series = state.snapshot_repo.load()?;
    let filtered = dashboard::filter_by_date_range(
        series.snapshots(),
        params.start_date.as_deref(),
        params.end_date.as_deref(),
    );
    Ok(Json(dashboard::summarize(&filtered)))
}
