//! Pure hourly aggregation over the pickup batch
//!
//! Everything in this module is a deterministic function of an immutable
//! [`RideData`] and an [`HourOfDay`]: no side effects, no ambient state.
//! Calling any of these twice with the same inputs yields identical results,
//! which is what makes the [`HourlyCache`] memoization safe — it is a
//! performance aid only, never a correctness requirement.
//!
//! The histogram applies the same hour-equality predicate as the filter in a
//! single pass; there is no second, separately cached filtering stage.

// Bucket indices and record counts fit comfortably in the cast targets
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use std::collections::HashMap;

use chrono::Timelike;
use serde::{Serialize, Serializer};

use crate::domain::{AggregateError, HourOfDay};
use crate::ride_data::{PickupRecord, RideData};

/// Minutes in an hour; the histogram always has exactly this many buckets.
pub const MINUTE_BUCKETS: usize = 60;

/// Shared hour predicate for filter and histogram.
fn in_hour(record: &PickupRecord, hour: HourOfDay) -> bool {
    record.timestamp.hour() == u32::from(hour.get())
}

/// Records whose timestamp falls in the selected hour, order preserved.
///
/// An empty result is a valid batch, not an error.
#[must_use]
pub fn filter_by_hour(data: &RideData, hour: HourOfDay) -> RideData {
    let matched = data
        .records()
        .iter()
        .filter(|r| in_hour(r, hour))
        .copied()
        .collect();
    RideData::from_records(matched)
}

/// Per-minute pickup counts for one hour window: 60 fixed buckets indexed
/// by minute-of-hour, all zero when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteHistogram {
    buckets: [u32; MINUTE_BUCKETS],
}

impl Serialize for MinuteHistogram {
    /// Serialized as a plain 60-element sequence, bucket index = minute.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.buckets.iter())
    }
}

impl MinuteHistogram {
    /// Count records per minute within the selected hour, in one pass over
    /// the full batch.
    #[must_use]
    pub fn collect(data: &RideData, hour: HourOfDay) -> Self {
        let mut buckets = [0u32; MINUTE_BUCKETS];
        for record in data.records().iter().filter(|r| in_hour(r, hour)) {
            buckets[record.timestamp.minute() as usize] += 1;
        }
        Self { buckets }
    }

    #[must_use]
    pub fn buckets(&self) -> &[u32; MINUTE_BUCKETS] {
        &self.buckets
    }

    /// Total pickups across all buckets (equals the hour filter's count).
    #[must_use]
    pub fn total(&self) -> u32 {
        self.buckets.iter().sum()
    }

    /// Busiest minute as `(minute, count)`, or `None` for an all-zero
    /// histogram. Ties resolve to the earliest minute.
    #[must_use]
    pub fn peak(&self) -> Option<(u8, u32)> {
        let (minute, &count) = self
            .buckets
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))?;
        if count == 0 {
            return None;
        }
        Some((minute as u8, count))
    }
}

/// Mean centroid of a record set, used only to center the city map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Midpoint {
    pub lat: f64,
    pub lon: f64,
}

/// Arithmetic mean of latitude and longitude, independently.
///
/// # Errors
/// Returns [`AggregateError::EmptyBatch`] for an empty batch; the mean of
/// zero elements is undefined and the caller skips the map instead.
pub fn midpoint(data: &RideData) -> Result<Midpoint, AggregateError> {
    if data.is_empty() {
        return Err(AggregateError::EmptyBatch);
    }
    let n = data.len() as f64;
    let (lat_sum, lon_sum) = data
        .records()
        .iter()
        .fold((0.0, 0.0), |(lat, lon), r| (lat + r.lat, lon + r.lon));
    Ok(Midpoint { lat: lat_sum / n, lon: lon_sum / n })
}

/// Everything the dashboard needs for one selected hour.
#[derive(Debug, Clone)]
pub struct HourView {
    /// Hour-filtered subset of the session batch.
    pub batch: RideData,
    pub histogram: MinuteHistogram,
    /// `None` when no record matched the hour (map render is skipped).
    pub midpoint: Option<Midpoint>,
}

impl HourView {
    #[must_use]
    pub fn compute(data: &RideData, hour: HourOfDay) -> Self {
        let batch = filter_by_hour(data, hour);
        let histogram = MinuteHistogram::collect(data, hour);
        let midpoint = midpoint(&batch).ok();
        Self { batch, histogram, midpoint }
    }
}

/// Explicit per-hour memoization, replacing the original's cache decorators.
///
/// Keys are hour values; entries are populated lazily and never invalidated
/// because the session batch is immutable. Owned by the single-threaded
/// orchestrator, so no locking discipline applies.
#[derive(Debug, Default)]
pub struct HourlyCache {
    views: HashMap<HourOfDay, HourView>,
}

impl HourlyCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached view for `hour`, computing it on first access.
    pub fn view(&mut self, data: &RideData, hour: HourOfDay) -> &HourView {
        self.views
            .entry(hour)
            .or_insert_with(|| HourView::compute(data, hour))
    }

    #[must_use]
    pub fn populated_hours(&self) -> usize {
        self.views.len()
    }
}

/// Headless summary of one hour window, printed as JSON to stdout.
#[derive(Debug, Serialize)]
pub struct HourSummary {
    pub hour: u8,
    pub window: String,
    pub total_records: usize,
    pub matched_records: usize,
    pub midpoint: Option<Midpoint>,
    pub peak_minute: Option<u8>,
    pub peak_count: u32,
    pub histogram: MinuteHistogram,
}

impl HourSummary {
    #[must_use]
    pub fn compute(data: &RideData, hour: HourOfDay) -> Self {
        let view = HourView::compute(data, hour);
        let peak = view.histogram.peak();
        Self {
            hour: hour.get(),
            window: hour.window_caption(),
            total_records: data.len(),
            matched_records: view.batch.len(),
            midpoint: view.midpoint,
            peak_minute: peak.map(|(minute, _)| minute),
            peak_count: peak.map_or(0, |(_, count)| count),
            histogram: view.histogram,
        }
    }
}
