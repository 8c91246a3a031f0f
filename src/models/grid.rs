//! Grid and workbook models.
//!
//! A [`Grid`] is the materialized contents of one sheet. Rows may have
//! different lengths; any out-of-range access simply yields `None`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, ExtractResult};

use super::Cell;

/// A read-only, row-major table of cells.
///
/// # Example
///
/// ```
/// use shift_extractor::models::Grid;
///
/// let grid = Grid::from_text_rows(&[&["15", ""], &["宇都宮美香", "9-18"]]);
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.text(1, 1).as_deref(), Some("9-18"));
/// assert_eq!(grid.text(1, 5), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a grid from rows of cells.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Creates a grid of text cells.
    pub fn from_text_rows(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|s| Cell::from(*s)).collect())
                .collect(),
        )
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of cells in the given row, or 0 if the row is absent.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Returns the cell at (row, col), if present.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    /// Returns the trimmed text of the cell at (row, col), if present.
    pub fn text(&self, row: usize, col: usize) -> Option<Cow<'_, str>> {
        self.cell(row, col).map(Cell::to_text)
    }

    /// Returns the first `n` rows rendered as text.
    pub fn preview(&self, n: usize) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .take(n)
            .map(|row| row.iter().map(|c| c.to_text().into_owned()).collect())
            .collect()
    }
}

/// A named sheet within a workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// The sheet's name as shown in the spreadsheet.
    pub name: String,
    /// The sheet's cells.
    pub rows: Grid,
}

/// An ordered collection of sheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    /// The sheets, in workbook order.
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Returns the sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Selects a sheet by name, or the first sheet when no name is given.
    ///
    /// # Errors
    ///
    /// Returns `EmptyWorkbook` if there are no sheets, or `SheetNotFound`
    /// if the named sheet does not exist.
    pub fn select(&self, name: Option<&str>) -> ExtractResult<&Sheet> {
        match name {
            Some(name) => self
                .sheets
                .iter()
                .find(|s| s.name == name)
                .ok_or_else(|| ExtractError::SheetNotFound {
                    sheet: name.to_string(),
                }),
            None => self.sheets.first().ok_or(ExtractError::EmptyWorkbook),
        }
    }
}
