// Domain models

mod snapshot;
mod view;

pub use snapshot::{Snapshot, SnapshotSeries};
pub use view::{
    ChartView, DisplayPoint, Granularity, SeriesFlags, ServerType, SummaryStats,
};
