//! Structured error types for ridehud
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

/// Ingestion failures: the data file itself or individual rows.
///
/// Row-level variants carry the 1-based data-row number (header excluded)
/// so a bad line can be found and fixed. A malformed row fails the whole
/// load rather than silently thinning the batch.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("data file not found: {0}")]
    FileNotFound(String),

    #[error("row {row}: expected at least 3 fields (timestamp, lat, lon), found {found}")]
    ShortRow { row: u64, found: usize },

    #[error("row {row}: unparseable timestamp {value:?}")]
    BadTimestamp { row: u64, value: String },

    #[error("row {row}: invalid {field} {value:?}")]
    BadCoordinate { row: u64, field: &'static str, value: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Aggregate failures over a record batch.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AggregateError {
    #[error("cannot compute a midpoint over an empty batch")]
    EmptyBatch,
}

/// Hour selector outside `[0, 23]`, rejected at the input boundary.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("hour {0} is out of range (expected 0-23)")]
pub struct HourOutOfRange(pub u8);
