//! Extraction result models.
//!
//! This module contains the [`ExtractionResult`] type returned by the engine
//! and the [`ShiftTotals`] aggregate derived from its records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ShiftRecord;

/// Totals over a sequence of shift records.
///
/// Always derived from the records; never maintained independently.
///
/// # Example
///
/// ```
/// use shift_extractor::models::{ShiftRecord, ShiftTotals};
/// use rust_decimal::Decimal;
///
/// let records = vec![ShiftRecord {
///     date: None,
///     name: "宇都宮美香".to_string(),
///     start_time: "9:00".to_string(),
///     end_time: "18:00".to_string(),
///     duration_hours: Decimal::new(90, 1),
/// }];
/// let totals = ShiftTotals::from_records(&records);
/// assert_eq!(totals.shift_count, 1);
/// assert_eq!(totals.total_hours, Decimal::new(90, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTotals {
    /// Sum of every record's `duration_hours`.
    pub total_hours: Decimal,
    /// Number of records.
    pub shift_count: usize,
}

impl ShiftTotals {
    /// Recomputes totals from a record sequence.
    pub fn from_records(records: &[ShiftRecord]) -> Self {
        records.iter().fold(Self::default(), |mut totals, record| {
            totals.add(record);
            totals
        })
    }

    /// Adds a single record to the totals.
    pub(crate) fn add(&mut self, record: &ShiftRecord) {
        self.total_hours += record.duration_hours;
        self.shift_count += 1;
    }
}

/// The complete result of extracting one person's shifts from a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Unique identifier for this extraction.
    pub extraction_id: Uuid,
    /// When the extraction was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the extraction.
    pub engine_version: String,
    /// The name that was searched for.
    pub name: String,
    /// The sheet that was scanned, when extracted from a workbook.
    pub sheet: Option<String>,
    /// The normalized shifts, in row-major discovery order.
    pub records: Vec<ShiftRecord>,
    /// Totals derived from `records`.
    pub totals: ShiftTotals,
    /// Whether any shift was found for the name.
    pub found: bool,
    /// Scan duration in microseconds.
    pub duration_us: u64,
}
