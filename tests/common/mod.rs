// Shared test helpers

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use registry_analytics::models::Snapshot;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str = "timestamp,total,local,remote";

/// Three rows over two days (two on 2025-10-01).
pub const TWO_DAY_CSV: &str = "timestamp,total,local,remote
2025-10-01T00:00:00Z,50,30,20
2025-10-01T05:00:00Z,52,31,21
2025-10-02T00:00:00Z,55,33,22";

pub fn snap(timestamp: &str, total: u64, local: u64, remote: u64) -> Snapshot {
    Snapshot {
        timestamp: timestamp.into(),
        total,
        local,
        remote,
    }
}

/// Writes `content` to `snapshots.csv` in a fresh temp dir. Keep the dir alive.
pub fn write_csv(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshots.csv");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// Hourly snapshots from 2025-10-01T00:00:00Z; total grows by one each hour.
pub fn hourly_series(hours: u32) -> Vec<Snapshot> {
    let start = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
    (0..hours)
        .map(|h| {
            let ts = start + Duration::hours(h as i64);
            snap(
                &ts.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
                100 + h as u64,
                60 + (h / 2) as u64,
                40 + (h / 3) as u64,
            )
        })
        .collect()
}
