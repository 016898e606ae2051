// Domain errors. None of these are fatal: callers log and skip or fall back.

use thiserror::Error;

/// Why a CSV data row was rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row {row}: missing timestamp")]
    MissingTimestamp { row: usize },

    #[error("row {row}: missing {field} column")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: {field} is not a non-negative integer: {value:?}")]
    InvalidCount {
        row: usize,
        field: &'static str,
        value: String,
    },
}

impl RowError {
    pub fn row(&self) -> usize {
        match self {
            RowError::MissingTimestamp { row }
            | RowError::MissingField { row, .. }
            | RowError::InvalidCount { row, .. } => *row,
        }
    }
}

/// Unrecognized selector values coming from query strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown granularity: {0:?}")]
    UnknownGranularity(String),

    #[error("unknown server type: {0:?}")]
    UnknownServerType(String),
}
