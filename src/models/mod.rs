//! Core data models for the Shift Extraction Engine.
//!
//! This module contains the input grid types and the output record types.

mod cell;
mod extraction_result;
mod grid;
mod shift_record;

pub use cell::Cell;
pub use extraction_result::{ExtractionResult, ShiftTotals};
pub use grid::{Grid, Sheet, Workbook};
pub use shift_record::ShiftRecord;
