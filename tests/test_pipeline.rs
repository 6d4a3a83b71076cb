//! End-to-end pipeline: CSV fixture → ingestion → hour filter → minute
//! histogram → midpoint, plus the headless JSON summary.

use std::io::Write;

use ridehud::analysis::{filter_by_hour, midpoint, HourSummary, MinuteHistogram};
use ridehud::domain::HourOfDay;
use ridehud::ride_data::RideData;
use tempfile::NamedTempFile;

fn hour(h: u8) -> HourOfDay {
    HourOfDay::new(h).expect("valid hour")
}

fn sample_data() -> RideData {
    // Hours [5, 5, 6], minutes [10, 10, 45] — the filter/histogram scenario
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        "date/time,lat,lon\n\
         2023-05-14 05:10:00,23.20,77.40\n\
         2023-05-14 05:10:30,23.30,77.44\n\
         2023-05-14 06:45:00,23.25,77.42\n"
    )
    .expect("Failed to write fixture");

    RideData::load(file.path(), 30_000).expect("Failed to load")
}

#[test]
fn test_filter_histogram_midpoint_agree() {
    let data = sample_data();

    let filtered = filter_by_hour(&data, hour(5));
    assert_eq!(filtered.len(), 2);

    let hist = MinuteHistogram::collect(&data, hour(5));
    assert_eq!(hist.total() as usize, filtered.len());
    assert_eq!(hist.buckets()[10], 2);

    let mid = midpoint(&filtered).expect("non-empty batch");
    assert!((mid.lat - 23.25).abs() < f64::EPSILON);
    assert!((mid.lon - 77.42).abs() < f64::EPSILON);
}

#[test]
fn test_every_hour_partitions_the_batch() {
    let data = sample_data();
    let total: usize = (0..24).map(|h| filter_by_hour(&data, hour(h)).len()).sum();
    assert_eq!(total, data.len());
}

#[test]
fn test_headless_summary_is_valid_json() {
    let data = sample_data();
    let summary = HourSummary::compute(&data, hour(5));

    let json = serde_json::to_string(&summary).expect("Failed to serialize");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");

    assert_eq!(parsed["hour"], 5);
    assert_eq!(parsed["window"], "5:00–6:00");
    assert_eq!(parsed["matched_records"], 2);
    assert_eq!(parsed["total_records"], 3);
    assert_eq!(parsed["peak_minute"], 10);
    assert_eq!(parsed["peak_count"], 2);
    assert_eq!(parsed["histogram"].as_array().unwrap().len(), 60);
    assert_eq!(parsed["histogram"][10], 2);
    assert!(parsed["midpoint"]["lat"].is_number());
}

#[test]
fn test_summary_of_empty_window_has_no_midpoint() {
    let data = sample_data();
    let summary = HourSummary::compute(&data, hour(12));

    let parsed: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&summary).unwrap()).unwrap();
    assert_eq!(parsed["matched_records"], 0);
    assert!(parsed["midpoint"].is_null());
    assert!(parsed["peak_minute"].is_null());
    assert_eq!(parsed["peak_count"], 0);
}
