//! Day-number inference for name matches.
//!
//! Shift tables place the day of the month a few rows above each block of
//! names. For a match at (row, col) the cells straight above it at the
//! configured offsets are inspected in order, and the first one holding a
//! bare 1-2 digit number is taken as the date. Nothing checks that the number
//! is a plausible day.

use crate::models::Grid;

use super::digits::is_decimal_digit;

/// Returns true if `text` is a non-empty run of at most `max_digits` digits.
///
/// Any Unicode decimal digit counts, so full-width and Arabic-Indic day
/// numbers are recognised.
///
/// # Examples
///
/// ```
/// use shift_extractor::extraction::is_day_number;
///
/// assert!(is_day_number("15", 2));
/// assert!(is_day_number("７", 2));
/// assert!(is_day_number("١٥", 2));
/// assert!(!is_day_number("150", 2));
/// assert!(!is_day_number("15.0", 2));
/// assert!(!is_day_number("", 2));
/// ```
pub fn is_day_number(text: &str, max_digits: usize) -> bool {
    let len = text.chars().count();
    (1..=max_digits).contains(&len) && text.chars().all(is_decimal_digit)
}

/// Infers the date for a match at (row, col).
///
/// Offsets are checked in the given order. An offset reaching above the
/// first row, or a row too short to have `col`, is skipped.
pub fn infer_date(
    grid: &Grid,
    row: usize,
    col: usize,
    offsets: &[usize],
    max_digits: usize,
) -> Option<String> {
    offsets.iter().find_map(|&offset| {
        let text = grid.text(row.checked_sub(offset)?, col)?;
        is_day_number(&text, max_digits).then(|| text.into_owned())
    })
}
