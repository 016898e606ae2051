// Downsampling: one snapshot per day/ISO week/month bucket.
// Policy is last value wins (latest timestamp in the bucket); nothing is averaged.

use std::borrow::Cow;
use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use crate::models::{Granularity, Snapshot};

/// Keeps the latest snapshot of each `granularity` bucket, ascending by timestamp.
///
/// `Hourly` is the native resolution of the data and returns the input as is.
pub fn aggregate(snapshots: &[Snapshot], granularity: Granularity) -> Vec<Snapshot> {
    if granularity == Granularity::Hourly {
        return snapshots.to_vec();
    }

    let mut latest: HashMap<String, &Snapshot> = HashMap::new();
    for snap in snapshots {
        let key = bucket_key(&snap.timestamp, granularity).unwrap_or_else(|| {
            warn!(timestamp = %snap.timestamp, "unparsable timestamp; kept in its own bucket");
            snap.timestamp.clone()
        });
        latest
            .entry(key)
            .and_modify(|kept| {
                if snap.timestamp >= kept.timestamp {
                    *kept = snap;
                }
            })
            .or_insert(snap);
    }

    let mut out: Vec<Snapshot> = latest.into_values().cloned().collect();
    out.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    out
}

/// Same as [`aggregate`] but takes the granularity by name; unknown names
/// leave the data unaggregated.
pub fn aggregate_by_name(snapshots: &[Snapshot], granularity: &str) -> Vec<Snapshot> {
    match granularity.parse::<Granularity>() {
        Ok(g) => aggregate(snapshots, g),
        Err(e) => {
            warn!(error = %e, "falling back to unaggregated data");
            snapshots.to_vec()
        }
    }
}

/// Bucket key of `timestamp`: `YYYY-MM-DD` (daily), `YYYY-Www` (ISO week),
/// `YYYY-MM` (monthly). Hourly data is not bucketed, so its key is the
/// timestamp itself. `None` if the timestamp has no readable date.
pub fn bucket_key(timestamp: &str, granularity: Granularity) -> Option<String> {
    let dt = parse_utc(timestamp)?;
    let key = match granularity {
        Granularity::Hourly => timestamp.to_string(),
        Granularity::Daily => dt.format("%Y-%m-%d").to_string(),
        Granularity::Weekly => iso_week_key(dt.date_naive()),
        Granularity::Monthly => dt.format("%Y-%m").to_string(),
    };
    Some(key)
}

/// `{ISO week-year}-W{week:02}`. chrono's `iso_week` shifts to the Thursday of
/// the date's week, so late-December dates can land in week 1 of the next year.
pub fn iso_week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// RFC 3339 (converted to UTC), then a naive `YYYY-MM-DDTHH:MM:SS[.f]` read
/// as UTC, then a bare leading `YYYY-MM-DD`.
pub(crate) fn parse_utc(timestamp: &str) -> Option<DateTime<Utc>> {
    let ts = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    let date = NaiveDate::parse_from_str(ts.get(..10)?, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// `timestamp` rewritten in `Z` form when it carries a non-zero RFC 3339
/// offset, so string comparison agrees with the UTC buckets. Anything else is
/// returned unchanged.
pub(crate) fn utc_timestamp(timestamp: &str) -> Cow<'_, str> {
    match DateTime::parse_from_rfc3339(timestamp.trim()) {
        Ok(dt) if dt.offset().local_minus_utc() != 0 => Cow::Owned(
            dt.with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.fZ")
                .to_string(),
        ),
        _ => Cow::Borrowed(timestamp),
    }
}
