// Print the snapshot CSV aggregated at one granularity, as JSON.
//
// Usage: cargo run --example dump_series -- [CSV_PATH] [GRANULARITY]
//   CSV_PATH     default: ./data/snapshots.csv
//   GRANULARITY  default: daily (hourly, daily, weekly, monthly)

use registry_analytics::snapshot_repo::{aggregate_by_name, load_series};
use std::env;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("./data/snapshots.csv");
    let granularity = args.get(2).map(String::as_str).unwrap_or("daily");

    let series = load_series(path)?;
    let aggregated = aggregate_by_name(series.snapshots(), granularity);

    println!("{}", serde_json::to_string_pretty(&aggregated)?);
    Ok(())
}
