//! Core domain types and errors

pub mod errors;
pub mod types;

pub use errors::{AggregateError, HourOutOfRange, IngestError};
pub use types::HourOfDay;
