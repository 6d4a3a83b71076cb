//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ridehud",
    about = "Explore hourly ride-pickup patterns in the terminal",
    after_help = "\
EXAMPLES:
    ridehud pickups.csv                      Interactive dashboard, hour 0
    ridehud pickups.csv --hour 17            Start at the 17:00-18:00 window
    ridehud pickups.csv --limit 5000         Ingest at most 5000 rows
    ridehud pickups.csv --hour 8 --headless  Print a JSON summary and exit"
)]
pub struct Args {
    /// Pickup CSV with (timestamp, latitude, longitude) as the first three columns
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Hour of day selected at startup
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=23))]
    pub hour: u8,

    /// Maximum number of data rows to ingest
    #[arg(long, default_value = "30000", value_name = "ROWS")]
    pub limit: usize,

    /// Print a JSON summary for the selected hour instead of launching the TUI
    #[arg(long)]
    pub headless: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
