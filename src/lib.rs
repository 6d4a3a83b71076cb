//! # ridehud - Terminal Dashboard for Hourly Ride-Pickup Exploration
//!
//! ridehud ingests a bounded sample of geolocated ride-pickup timestamps
//! from a CSV file and renders, per selected hour of day, scatter maps of
//! the pickups and a per-minute histogram in a terminal UI.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   ┌────────────────────────────┐   ┌──────────────┐
//! │  Ingestion   │──▶│       Pure Pipeline        │──▶│     TUI      │
//! │ (CSV, once)  │   │ filter → histogram/midpoint│   │  (Terminal)  │
//! └──────────────┘   └────────────────────────────┘   └──────────────┘
//!        │                        ▲
//!        ▼                        │ hour selector (keyboard)
//!   RideData (immutable) ─────────┘
//! ```
//!
//! The batch is loaded once per session and never mutated; everything
//! downstream is a deterministic pure function of the batch and the hour
//! selector, memoized per hour in an explicit cache.
//!
//! ## Module Structure
//!
//! - [`ride_data`]: record model and bounded CSV ingestion
//! - [`analysis`]: hour filter, minute histogram, midpoint, per-hour cache
//! - [`places`]: fixed reference map centers (static configuration)
//! - [`tui`]: terminal dashboard (maps, histogram, summary, help)
//! - [`preflight`]: data-file sanity checks before ingestion
//! - [`cli`]: command-line argument parsing
//! - [`domain`]: validated selector types and structured errors
//!
//! ## Typical Usage
//!
//! ```bash
//! # Interactive dashboard over the first 30000 rows
//! ridehud pickups.csv --hour 17
//!
//! # Non-interactive JSON summary of one hour window
//! ridehud pickups.csv --hour 17 --headless
//! ```

pub mod analysis;
pub mod cli;
pub mod domain;
pub mod places;
pub mod preflight;
pub mod ride_data;
pub mod tui;
