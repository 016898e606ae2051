use serde::{Deserialize, Serialize};

/// One observation of the registry: server counts at `timestamp`.
///
/// `timestamp` is a zero-padded UTC ISO-8601 string; ordering and range
/// checks compare it as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub timestamp: String,
    pub total: u64,
    pub local: u64,
    pub remote: u64,
}

/// All snapshots of one load, ascending by timestamp, with derived bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSeries {
    snapshots: Vec<Snapshot>,
    start_timestamp: String,
    end_timestamp: String,
    count: usize,
}

impl SnapshotSeries {
    /// Wraps `snapshots`, sorting them if needed; bounds come from the sorted order.
    pub fn new(mut snapshots: Vec<Snapshot>) -> Self {
        if !snapshots.is_sorted_by(|a, b| a.timestamp <= b.timestamp) {
            snapshots.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        }
        let start_timestamp = snapshots
            .first()
            .map(|s| s.timestamp.clone())
            .unwrap_or_default();
        let end_timestamp = snapshots
            .last()
            .map(|s| s.timestamp.clone())
            .unwrap_or_default();
        let count = snapshots.len();
        Self {
            snapshots,
            start_timestamp,
            end_timestamp,
            count,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn start_timestamp(&self) -> &str {
        &self.start_timestamp
    }

    pub fn end_timestamp(&self) -> &str {
        &self.end_timestamp
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}
