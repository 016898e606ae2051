// Write a synthetic hourly snapshot CSV for local development.
//
// Usage: cargo run --example generate_snapshots -- [CSV_PATH]
//   CSV_PATH  default: ./data/snapshots.csv
//
// 28 days of hourly rows from 2025-10-01T00:00:00Z. Counts grow on a fixed
// pattern so repeated runs produce the same file.

use chrono::{Duration, TimeZone, Utc};
use std::env;
use std::fmt::Write as _;
use std::path::Path;

const HOURS: i64 = 28 * 24;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("./data/snapshots.csv");

    let start = Utc
        .with_ymd_and_hms(2025, 10, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("invalid start date"))?;

    let (mut total, mut local, mut remote) = (50u64, 30u64, 25u64);
    let mut csv = String::from("timestamp,total,local,remote\n");
    for hour in 0..=HOURS {
        if hour % 3 == 0 {
            total += 1 + (hour % 2) as u64;
            local += (hour % 2) as u64;
            remote += ((hour + 1) % 2) as u64;
        }
        let ts = start + Duration::hours(hour);
        writeln!(
            csv,
            "{},{},{},{}",
            ts.format("%Y-%m-%dT%H:%M:%SZ"),
            total,
            local,
            remote
        )?;
    }

    if let Some(parent) = Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, csv)?;

    println!("Generated {} snapshots in {}", HOURS + 1, path);
    println!("Latest data: Total={}, Local={}, Remote={}", total, local, remote);
    Ok(())
}
