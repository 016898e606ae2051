// Dashboard selectors and display-side shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ViewError;

/// Time-bucket resolution for the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Native resolution of the collected data; no bucketing.
    Hourly,
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Hourly => "hourly",
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }
}

impl FromStr for Granularity {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hourly" => Ok(Granularity::Hourly),
            "daily" => Ok(Granularity::Daily),
            "weekly" => Ok(Granularity::Weekly),
            "monthly" => Ok(Granularity::Monthly),
            _ => Err(ViewError::UnknownGranularity(s.to_string())),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which server population the `total` line shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerType {
    #[default]
    All,
    Local,
    Remote,
}

impl ServerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerType::All => "all",
            ServerType::Local => "local",
            ServerType::Remote => "remote",
        }
    }
}

impl FromStr for ServerType {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ServerType::All),
            "local" => Ok(ServerType::Local),
            "remote" => Ok(ServerType::Remote),
            _ => Err(ViewError::UnknownServerType(s.to_string())),
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One chart point: formatted label plus the three counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPoint {
    pub label: String,
    pub total: u64,
    pub local: u64,
    pub remote: u64,
}

/// Which lines the chart should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesFlags {
    pub show_total: bool,
    pub show_local: bool,
    pub show_remote: bool,
}

/// Headline numbers for the stat cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub current_total: u64,
    pub current_local: u64,
    pub current_remote: u64,
    /// Last total minus first total in range; negative when the registry shrank.
    pub growth: i64,
    pub data_points: usize,
    pub local_share_percent: u64,
    pub remote_share_percent: u64,
}

/// Everything the chart page needs for one filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub granularity: Granularity,
    pub server_type: ServerType,
    pub points: Vec<DisplayPoint>,
    pub flags: SeriesFlags,
    pub stats: SummaryStats,
}
