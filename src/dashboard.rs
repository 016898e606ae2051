// Filter/view composition: date range → aggregation → display points, flags and stats.

use crate::models::{
    ChartView, DisplayPoint, Granularity, SeriesFlags, ServerType, Snapshot, SnapshotSeries,
    SummaryStats,
};
use crate::snapshot_repo::aggregation::{aggregate, bucket_key, parse_utc, utc_timestamp};

/// Filter selection for one chart render. Empty or `None` bounds are unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartQuery {
    pub granularity: Granularity,
    pub server_type: ServerType,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Keeps snapshots whose timestamp lies in `[start, end]`.
///
/// Each bound is compared against the timestamp truncated to the bound's
/// length, so `end = "2025-10-02"` keeps every record of that day. Offset
/// timestamps are compared in UTC, the same day the daily bucket uses.
pub fn filter_by_date_range(
    snapshots: &[Snapshot],
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<Snapshot> {
    let start = start.filter(|s| !s.is_empty());
    let end = end.filter(|s| !s.is_empty());
    snapshots
        .iter()
        .filter(|s| {
            let ts = utc_timestamp(&s.timestamp);
            start.is_none_or(|b| truncated(&ts, b) >= b)
                && end.is_none_or(|b| truncated(&ts, b) <= b)
        })
        .cloned()
        .collect()
}

fn truncated<'a>(timestamp: &'a str, bound: &str) -> &'a str {
    timestamp.get(..bound.len()).unwrap_or(timestamp)
}

/// Chart label for a snapshot at the given granularity.
pub fn display_label(timestamp: &str, granularity: Granularity) -> String {
    match granularity {
        Granularity::Hourly => match parse_utc(timestamp) {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => timestamp.to_string(),
        },
        _ => bucket_key(timestamp, granularity).unwrap_or_else(|| timestamp.to_string()),
    }
}

pub fn to_display_points(snapshots: &[Snapshot], granularity: Granularity) -> Vec<DisplayPoint> {
    snapshots
        .iter()
        .map(|s| DisplayPoint {
            label: display_label(&s.timestamp, granularity),
            total: s.total,
            local: s.local,
            remote: s.remote,
        })
        .collect()
}

/// Swaps `total` for the selected population; `local`/`remote` stay for the other lines.
pub fn project(points: Vec<DisplayPoint>, server_type: ServerType) -> Vec<DisplayPoint> {
    match server_type {
        ServerType::All => points,
        ServerType::Local => points
            .into_iter()
            .map(|p| DisplayPoint { total: p.local, ..p })
            .collect(),
        ServerType::Remote => points
            .into_iter()
            .map(|p| DisplayPoint { total: p.remote, ..p })
            .collect(),
    }
}

pub fn series_flags(server_type: ServerType) -> SeriesFlags {
    SeriesFlags {
        show_total: server_type == ServerType::All,
        show_local: matches!(server_type, ServerType::All | ServerType::Local),
        show_remote: matches!(server_type, ServerType::All | ServerType::Remote),
    }
}

/// `part` as a rounded percentage of `total`; 0 when `total` is 0.
pub fn percentage_share(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u64
}

/// `last - first`, saturated to the `i64` range.
fn growth(first: u64, last: u64) -> i64 {
    let diff = i128::from(last) - i128::from(first);
    diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Stats over the date-filtered, unaggregated snapshots.
pub fn summarize(snapshots: &[Snapshot]) -> SummaryStats {
    let (Some(first), Some(last)) = (snapshots.first(), snapshots.last()) else {
        return SummaryStats::default();
    };
    SummaryStats {
        current_total: last.total,
        current_local: last.local,
        current_remote: last.remote,
        growth: growth(first.total, last.total),
        data_points: snapshots.len(),
        local_share_percent: percentage_share(last.local, last.total),
        remote_share_percent: percentage_share(last.remote, last.total),
    }
}

/// Range filter first so "latest per bucket" only sees the selected range.
pub fn build_chart(series: &SnapshotSeries, query: &ChartQuery) -> ChartView {
    let filtered = filter_by_date_range(
        series.snapshots(),
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    );
    let aggregated = aggregate(&filtered, query.granularity);
    let points = project(
        to_display_points(&aggregated, query.granularity),
        query.server_type,
    );

    ChartView {
        granularity: query.granularity,
        server_type: query.server_type,
        points,
        flags: series_flags(query.server_type),
        stats: summarize(&filtered),
    }
}
