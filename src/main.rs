//! # ridehud - Main Entry Point
//!
//! Supports two operational modes:
//! - **Interactive TUI** (default): hour-by-hour exploration with maps and
//!   the minute histogram
//! - **Headless** (`--headless`): print a JSON summary of the selected hour
//!   to stdout for scripting

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::time::Instant;

use ridehud::analysis::HourSummary;
use ridehud::cli::Args;
use ridehud::domain::HourOfDay;
use ridehud::preflight::check_data_file;
use ridehud::ride_data::RideData;
use ridehud::tui;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    let msg = err.to_string().to_lowercase();
    if msg.contains("out of range") || msg.contains("not found") {
        EXIT_USAGE
    } else {
        EXIT_ERROR
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // clap already range-checks --hour; the domain constructor is the
    // boundary that makes the invariant explicit either way.
    let hour = HourOfDay::new(args.hour)?;

    check_data_file(&args.data)?;

    let started = Instant::now();
    let data = RideData::load(&args.data, args.limit)
        .with_context(|| format!("failed to ingest {}", args.data.display()))?;
    info!("ingestion took {:.1}ms", started.elapsed().as_secs_f64() * 1000.0);

    if !args.quiet {
        eprintln!("ridehud v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("data: {}", args.data.display());
        eprintln!("records: {} (cap {})", data.len(), args.limit);
    }

    if args.headless {
        let summary = HourSummary::compute(&data, hour);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    tui::run(data, hour)
}
