//! Configuration types for the shift scanner.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the scanner YAML file.

use serde::Deserialize;

/// Name searched for when a request does not supply one.
pub const DEFAULT_NAME: &str = "宇都宮美香";

/// Rows above a name cell inspected for a day number, closest first.
pub const DEFAULT_DATE_ROW_OFFSETS: [usize; 2] = [3, 4];

/// Maximum number of digits in a day-number cell.
pub const DEFAULT_MAX_DATE_DIGITS: usize = 2;

/// Number of rows returned by a sheet preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Scanner configuration.
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration.
///
/// # Example
///
/// ```
/// use shift_extractor::config::ScannerConfig;
///
/// let config = ScannerConfig::default();
/// assert_eq!(config.date_row_offsets, vec![3, 4]);
/// assert_eq!(config.max_date_digits, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Name searched for when none is given.
    pub default_name: String,
    /// Row offsets above a match inspected for the day number, in precedence order.
    pub date_row_offsets: Vec<usize>,
    /// Maximum digit count of a day-number cell.
    pub max_date_digits: usize,
    /// Rows returned by a sheet preview.
    pub preview_rows: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_NAME.to_string(),
            date_row_offsets: DEFAULT_DATE_ROW_OFFSETS.to_vec(),
            max_date_digits: DEFAULT_MAX_DATE_DIGITS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}
