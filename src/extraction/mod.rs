//! Shift extraction logic.
//!
//! This module contains the grid scanner that finds a name in a timesheet,
//! the day-number inference used for each match, the time-range normalizer
//! with overnight rollover, and the aggregation of normalized shifts into
//! records and totals.

mod aggregation;
mod date_inference;
mod digits;
mod engine;
mod grid_scanner;
mod shift_normalizer;

pub use aggregation::{ShiftAccumulator, aggregate};
pub use date_inference::{infer_date, is_day_number};
pub use engine::{extract_from_workbook, extract_shifts};
pub use grid_scanner::{Candidate, GridScanner};
pub use shift_normalizer::{NormalizedShift, normalize_shift};
