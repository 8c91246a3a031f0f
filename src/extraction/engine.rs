//! Extraction entry points.
//!
//! These functions tie the scanner, normalizer and aggregation together and
//! wrap the outcome in an [`ExtractionResult`].

use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::ScannerConfig;
use crate::error::{ExtractError, ExtractResult};
use crate::models::{ExtractionResult, Grid, Workbook};

use super::aggregation::aggregate;
use super::grid_scanner::GridScanner;

/// Extracts the shifts recorded for `name` in `grid`.
///
/// # Errors
///
/// Returns `InvalidName` if `name` is empty or whitespace. Cell contents
/// never cause an error.
///
/// # Examples
///
/// ```
/// use shift_extractor::config::ScannerConfig;
/// use shift_extractor::extraction::extract_shifts;
/// use shift_extractor::models::Grid;
/// use rust_decimal::Decimal;
///
/// let grid = Grid::from_text_rows(&[
///     &["", "15", ""],
///     &["", "", ""],
///     &["", "", ""],
///     &["", "宇都宮美香", "22:30-6:00"],
/// ]);
/// let result = extract_shifts(&grid, "宇都宮美香", &ScannerConfig::default()).unwrap();
///
/// assert!(result.found);
/// assert_eq!(result.records[0].date.as_deref(), Some("15"));
/// assert_eq!(result.totals.total_hours, Decimal::new(75, 1));
/// ```
pub fn extract_shifts(
    grid: &Grid,
    name: &str,
    config: &ScannerConfig,
) -> ExtractResult<ExtractionResult> {
    run_extraction(grid, name, None, config)
}

/// Extracts the shifts for `name` from a sheet of `workbook`.
///
/// With `sheet` unset the first sheet is used.
///
/// # Errors
///
/// Returns `EmptyWorkbook` or `SheetNotFound` when no sheet can be selected,
/// and `InvalidName` for a blank name.
pub fn extract_from_workbook(
    workbook: &Workbook,
    sheet: Option<&str>,
    name: &str,
    config: &ScannerConfig,
) -> ExtractResult<ExtractionResult> {
    let sheet = workbook.select(sheet)?;
    run_extraction(&sheet.rows, name, Some(&sheet.name), config)
}

fn run_extraction(
    grid: &Grid,
    name: &str,
    sheet: Option<&str>,
    config: &ScannerConfig,
) -> ExtractResult<ExtractionResult> {
    validate_name(name)?;

    let start_time = Instant::now();
    let acc = aggregate(GridScanner::new(grid, name, config), name);
    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        name = %name,
        sheet = ?sheet,
        shift_count = acc.totals.shift_count,
        total_hours = %acc.totals.total_hours,
        duration_us,
        "Extraction finished"
    );

    Ok(ExtractionResult {
        extraction_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        name: name.to_string(),
        sheet: sheet.map(str::to_string),
        found: !acc.records.is_empty(),
        records: acc.records,
        totals: acc.totals,
        duration_us,
    })
}

fn validate_name(name: &str) -> ExtractResult<()> {
    if name.trim().is_empty() {
        return Err(ExtractError::InvalidName {
            message: "name must not be blank".to_string(),
        });
    }
    Ok(())
}
