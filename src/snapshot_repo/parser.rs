// CSV → Snapshot. Bad rows are logged and dropped; the parse itself never fails.

use tracing::warn;

use crate::error::RowError;
use crate::models::Snapshot;

/// Parses `timestamp,total,local,remote` content (first line is the header).
///
/// Returns snapshots sorted ascending by timestamp string. Header-only or
/// empty content yields an empty vector.
pub fn parse_snapshots(content: &str) -> Vec<Snapshot> {
    let lines: Vec<&str> = content.trim().lines().collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let mut snapshots = Vec::with_capacity(lines.len() - 1);
    for (row, line) in lines.iter().enumerate().skip(1) {
        match parse_row(row, line) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => warn!(row, raw = %line, error = %e, "skipping invalid snapshot row"),
        }
    }

    // Producer appends in order, but don't rely on it.
    snapshots.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    snapshots
}

/// Parses one data row; `row` is the line index used in diagnostics.
pub fn parse_row(row: usize, line: &str) -> Result<Snapshot, RowError> {
    let mut fields = line.trim().split(',').map(str::trim);

    let timestamp = fields.next().unwrap_or_default();
    if timestamp.is_empty() {
        return Err(RowError::MissingTimestamp { row });
    }
    let total = parse_count(row, "total", fields.next())?;
    let local = parse_count(row, "local", fields.next())?;
    let remote = parse_count(row, "remote", fields.next())?;

    Ok(Snapshot {
        timestamp: timestamp.to_string(),
        total,
        local,
        remote,
    })
}

fn parse_count(row: usize, field: &'static str, value: Option<&str>) -> Result<u64, RowError> {
    let Some(value) = value else {
        return Err(RowError::MissingField { row, field });
    };
    value.parse::<u64>().map_err(|_| RowError::InvalidCount {
        row,
        field,
        value: value.to_string(),
    })
}
