//! Single-month calendar printer.
//!
//! Features:
//! - Month and year from positional arguments, defaulting to today
//! - Any weekday as the first column, given by full or abbreviated name
//! - Fixed-width grid written to any `std::io::Write` sink

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod types;
