//! Aggregation of candidates into shift records and totals.
//!
//! Candidates are folded into a [`ShiftAccumulator`]. A candidate whose time
//! text does not normalize is dropped without error; a missing date never
//! drops a candidate.

use tracing::debug;

use crate::models::{ShiftRecord, ShiftTotals};

use super::grid_scanner::Candidate;
use super::shift_normalizer::normalize_shift;

/// Accumulated records and running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftAccumulator {
    /// Records in the order their candidates were folded.
    pub records: Vec<ShiftRecord>,
    /// Totals over `records`.
    pub totals: ShiftTotals,
}

impl ShiftAccumulator {
    /// Folds one candidate into the accumulator.
    pub fn push(mut self, candidate: Candidate, name: &str) -> Self {
        let Some(shift) = normalize_shift(&candidate.raw_time) else {
            debug!(
                row = candidate.row,
                col = candidate.col,
                raw_time = %candidate.raw_time,
                "Dropped candidate with unparseable time"
            );
            return self;
        };

        let record = ShiftRecord {
            date: candidate.inferred_date,
            name: name.to_string(),
            start_time: shift.start_time,
            end_time: shift.end_time,
            duration_hours: shift.duration_hours,
        };
        self.totals.add(&record);
        self.records.push(record);
        self
    }
}

/// Normalizes every candidate and accumulates the successful ones.
///
/// # Examples
///
/// ```
/// use shift_extractor::extraction::{Candidate, aggregate};
/// use rust_decimal::Decimal;
///
/// let candidates = vec![
///     Candidate { row: 3, col: 0, raw_time: "9-18".into(), inferred_date: Some("1".into()) },
///     Candidate { row: 3, col: 2, raw_time: "休み".into(), inferred_date: Some("2".into()) },
/// ];
/// let acc = aggregate(candidates, "宇都宮美香");
/// assert_eq!(acc.totals.shift_count, 1);
/// assert_eq!(acc.totals.total_hours, Decimal::from(9));
/// ```
pub fn aggregate<I>(candidates: I, name: &str) -> ShiftAccumulator
where
    I: IntoIterator<Item = Candidate>,
{
    candidates
        .into_iter()
        .fold(ShiftAccumulator::default(), |acc, candidate| {
            acc.push(candidate, name)
        })
}
