//! Pickup record data model and CSV ingestion
//!
//! `RideData` is the immutable batch every downstream computation takes as
//! an explicit argument. It is created once per session by [`RideData::load`]
//! and never mutated afterwards; filters and aggregates are pure views over
//! it (see [`crate::analysis`]).
//!
//! Ingestion contract: the first three CSV columns are consumed positionally
//! as (timestamp, latitude, longitude), any further columns are discarded,
//! the header row is skipped, and at most `limit` data rows are read. A row
//! that fails to parse rejects the whole load with a row-numbered error —
//! a partially corrupted batch would silently skew every aggregate.

use std::path::Path;

use chrono::NaiveDateTime;
use log::{debug, info};

use crate::domain::IngestError;

/// One pickup observation, immutable once ingested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupRecord {
    pub timestamp: NaiveDateTime,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// An ordered batch of pickup records, bounded at ingestion time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RideData {
    records: Vec<PickupRecord>,
}

/// Timestamp layouts accepted at ingestion. The source exports vary between
/// ISO-ish and day-first layouts; anything else is a row-level error.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M",
];

fn parse_timestamp(raw: &str, row: u64) -> Result<NaiveDateTime, IngestError> {
    let trimmed = raw.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ts);
        }
    }
    Err(IngestError::BadTimestamp { row, value: raw.to_string() })
}

fn parse_coordinate(raw: &str, field: &'static str, row: u64) -> Result<f64, IngestError> {
    let bad = || IngestError::BadCoordinate { row, field, value: raw.to_string() };
    let value: f64 = raw.trim().parse().map_err(|_| bad())?;
    if !value.is_finite() {
        return Err(bad());
    }
    Ok(value)
}

impl RideData {
    /// Load up to `limit` records from a CSV file.
    ///
    /// The header row is present but ignored; fields are taken by position.
    /// Rows beyond the cap are never read from disk.
    ///
    /// # Errors
    /// Returns [`IngestError`] if the file is missing or unreadable, or if
    /// any ingested row has fewer than three fields, an unparseable
    /// timestamp, or a non-finite coordinate.
    pub fn load(path: impl AsRef<Path>, limit: usize) -> Result<Self, IngestError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IngestError::FileNotFound(path.display().to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // extra columns are discarded, not an error
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut records = Vec::with_capacity(limit.min(30_000));
        for (idx, result) in reader.records().enumerate() {
            if records.len() >= limit {
                debug!("row cap of {limit} reached, ignoring the rest of the file");
                break;
            }
            let row = idx as u64 + 1; // 1-based data row, header excluded
            let raw = result?;
            if raw.len() < 3 {
                return Err(IngestError::ShortRow { row, found: raw.len() });
            }

            records.push(PickupRecord {
                timestamp: parse_timestamp(&raw[0], row)?,
                lat: parse_coordinate(&raw[1], "latitude", row)?,
                lon: parse_coordinate(&raw[2], "longitude", row)?,
            });
        }

        info!("loaded {} records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    /// Build a batch directly from records (filter results, test fixtures).
    #[must_use]
    pub fn from_records(records: Vec<PickupRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[PickupRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_formats() {
        for raw in [
            "2023-05-14 17:54:04",
            "2023-05-14T17:54:04",
            "2023/05/14 17:54:04",
            "14-05-2023 17:54:04",
            "14/05/2023 17:54",
        ] {
            let ts = parse_timestamp(raw, 1).unwrap();
            assert_eq!(chrono::Timelike::hour(&ts), 17, "format failed: {raw}");
        }
    }

    #[test]
    fn test_bad_timestamp_carries_row() {
        let err = parse_timestamp("yesterday-ish", 42).unwrap_err();
        assert!(matches!(err, IngestError::BadTimestamp { row: 42, .. }));
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        assert!(parse_coordinate("23.25", "latitude", 1).is_ok());
        assert!(parse_coordinate("NaN", "latitude", 1).is_err());
        assert!(parse_coordinate("inf", "longitude", 1).is_err());
        assert!(parse_coordinate("", "latitude", 1).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = RideData::load("/definitely/not/here.csv", 10).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound(_)));
    }
}
