use std::io::Write;

use ridehud::domain::IngestError;
use ridehud::ride_data::RideData;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write fixture");
    file
}

#[test]
fn test_load_skips_header_and_reads_rows() {
    let file = csv_file(
        "date/time,lat,lon\n\
         2023-05-14 05:10:00,23.20,77.40\n\
         2023-05-14 06:45:00,23.30,77.44\n",
    );

    let data = RideData::load(file.path(), 30_000).expect("Failed to load");
    assert_eq!(data.len(), 2);
    assert!((data.records()[0].lat - 23.20).abs() < f64::EPSILON);
}

#[test]
fn test_load_caps_at_limit() {
    let mut contents = String::from("date/time,lat,lon\n");
    for minute in 0..50 {
        contents.push_str(&format!("2023-05-14 05:{minute:02}:00,23.25,77.42\n"));
    }
    let file = csv_file(&contents);

    let data = RideData::load(file.path(), 10).expect("Failed to load");
    assert_eq!(data.len(), 10);
    // First rows of the file, in order
    assert_eq!(chrono::Timelike::minute(&data.records()[9].timestamp), 9);
}

#[test]
fn test_extra_columns_are_discarded() {
    let file = csv_file(
        "date/time,lat,lon,base,notes\n\
         2023-05-14 05:10:00,23.20,77.40,B02512,late pickup\n",
    );

    let data = RideData::load(file.path(), 30_000).expect("Failed to load");
    assert_eq!(data.len(), 1);
    assert!((data.records()[0].lon - 77.40).abs() < f64::EPSILON);
}

#[test]
fn test_bad_timestamp_rejects_with_row_number() {
    let file = csv_file(
        "date/time,lat,lon\n\
         2023-05-14 05:10:00,23.20,77.40\n\
         not-a-date,23.30,77.44\n",
    );

    let err = RideData::load(file.path(), 30_000).unwrap_err();
    match err {
        IngestError::BadTimestamp { row, value } => {
            assert_eq!(row, 2);
            assert_eq!(value, "not-a-date");
        }
        other => panic!("expected BadTimestamp, got {other}"),
    }
}

#[test]
fn test_bad_coordinate_rejects_load() {
    let file = csv_file(
        "date/time,lat,lon\n\
         2023-05-14 05:10:00,north-ish,77.40\n",
    );

    let err = RideData::load(file.path(), 30_000).unwrap_err();
    assert!(matches!(err, IngestError::BadCoordinate { row: 1, field: "latitude", .. }));
}

#[test]
fn test_short_row_rejects_load() {
    let file = csv_file(
        "date/time,lat,lon\n\
         2023-05-14 05:10:00,23.20\n",
    );

    let err = RideData::load(file.path(), 30_000).unwrap_err();
    assert!(matches!(err, IngestError::ShortRow { row: 1, found: 2 }));
}

#[test]
fn test_header_only_file_is_an_empty_batch() {
    let file = csv_file("date/time,lat,lon\n");
    let data = RideData::load(file.path(), 30_000).expect("Failed to load");
    assert!(data.is_empty());
}
