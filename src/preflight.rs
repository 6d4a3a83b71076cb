//! Pre-flight checks run before anything else touches the data file.
//!
//! Fails fast with actionable messages instead of letting the CSV reader
//! produce a less helpful error mid-load.

use std::path::Path;

use anyhow::{bail, Result};
use log::warn;

/// Validate the data file path before ingestion.
///
/// # Errors
/// Returns an error if the path does not exist or is not a regular file.
pub fn check_data_file(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!(
            "data file not found: {}\n\n\
             ridehud expects a CSV with (timestamp, latitude, longitude) columns.\n\
             Check the path or pass a different file.",
            path.display()
        );
    }

    let meta = std::fs::metadata(path)?;
    if !meta.is_file() {
        bail!("not a regular file: {}", path.display());
    }

    if meta.len() == 0 {
        bail!("data file is empty: {}", path.display());
    }

    // Wrong extension still loads fine if the content is CSV
    if path.extension().and_then(|e| e.to_str()) != Some("csv") {
        warn!("{} does not have a .csv extension, attempting to read it anyway", path.display());
    }

    Ok(())
}
