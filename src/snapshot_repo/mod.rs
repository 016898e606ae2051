// Flat-file snapshot source. Every load re-reads the CSV; nothing is cached.

pub mod aggregation;
pub mod parser;

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::models::SnapshotSeries;

pub use aggregation::{aggregate, aggregate_by_name, bucket_key};
pub use parser::parse_snapshots;

#[derive(Debug, Clone)]
pub struct SnapshotRepo {
    path: PathBuf,
}

impl SnapshotRepo {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the CSV. A missing file is the cold-start state
    /// (before the first collection run) and loads as an empty series.
    /// Invalid UTF-8 is replaced, so only the rows it lands in are dropped.
    #[instrument(skip(self), fields(repo = "snapshots", operation = "load", path = %self.path.display()))]
    pub fn load(&self) -> anyhow::Result<SnapshotSeries> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("snapshot source not found, returning empty series");
                return Ok(SnapshotSeries::empty());
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "read {}: {}",
                    self.path.display(),
                    e
                ));
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        let series = SnapshotSeries::from_content(&content);
        info!(
            count = series.count(),
            start = series.start_timestamp(),
            end = series.end_timestamp(),
            "loaded snapshots"
        );
        Ok(series)
    }
}

impl SnapshotSeries {
    /// Builds a series straight from CSV text.
    pub fn from_content(content: &str) -> Self {
        SnapshotSeries::new(parse_snapshots(content))
    }
}

/// One-shot load of the CSV at `path`.
pub fn load_series<P: AsRef<Path>>(path: P) -> anyhow::Result<SnapshotSeries> {
    SnapshotRepo::new(path).load()
}
