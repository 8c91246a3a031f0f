//! Grid scanning for name matches.
//!
//! [`GridScanner`] walks a [`Grid`] in row-major order and yields a
//! [`Candidate`] for every cell whose text contains the target name and
//! that has a cell to its right. Matching is a case-sensitive substring test,
//! so `美香` also matches `宇都宮美香`.

use crate::config::ScannerConfig;
use crate::models::Grid;

use super::date_inference::infer_date;

/// A name match paired with its inferred date and adjacent raw time text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Zero-based row of the matching cell.
    pub row: usize,
    /// Zero-based column of the matching cell.
    pub col: usize,
    /// Trimmed text of the cell immediately to the right.
    pub raw_time: String,
    /// Day number found above the match, if any.
    pub inferred_date: Option<String>,
}

/// A lazy, single-pass iterator over the name matches in a grid.
///
/// The scanner borrows the grid and is consumed by iteration; scanning the
/// same grid again requires a new scanner and produces the same sequence.
///
/// # Example
///
/// ```
/// use shift_extractor::config::ScannerConfig;
/// use shift_extractor::extraction::GridScanner;
/// use shift_extractor::models::Grid;
///
/// let grid = Grid::from_text_rows(&[
///     &["15"],
///     &[""],
///     &[""],
///     &["宇都宮美香", "9-18"],
/// ]);
/// let config = ScannerConfig::default();
/// let candidates: Vec<_> = GridScanner::new(&grid, "宇都宮美香", &config).collect();
///
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].raw_time, "9-18");
/// assert_eq!(candidates[0].inferred_date.as_deref(), Some("15"));
/// ```
#[derive(Debug)]
pub struct GridScanner<'a> {
    grid: &'a Grid,
    name: &'a str,
    date_row_offsets: &'a [usize],
    max_date_digits: usize,
    row: usize,
    col: usize,
}

impl<'a> GridScanner<'a> {
    /// Creates a scanner for `name` over `grid`.
    pub fn new(grid: &'a Grid, name: &'a str, config: &'a ScannerConfig) -> Self {
        Self {
            grid,
            name,
            date_row_offsets: &config.date_row_offsets,
            max_date_digits: config.max_date_digits,
            row: 0,
            col: 0,
        }
    }

    /// Advances the cursor and returns the position it held.
    fn next_position(&mut self) -> Option<(usize, usize)> {
        while self.row < self.grid.row_count() {
            if self.col < self.grid.row_len(self.row) {
                let position = (self.row, self.col);
                self.col += 1;
                return Some(position);
            }
            self.row += 1;
            self.col = 0;
        }
        None
    }

    fn candidate_at(&self, row: usize, col: usize) -> Option<Candidate> {
        let text = self.grid.text(row, col)?;
        if !text.contains(self.name) {
            return None;
        }

        // Without a right-hand neighbour there is no time to read.
        let raw_time = self.grid.text(row, col + 1)?.into_owned();

        Some(Candidate {
            row,
            col,
            raw_time,
            inferred_date: infer_date(
                self.grid,
                row,
                col,
                self.date_row_offsets,
                self.max_date_digits,
            ),
        })
    }
}

impl Iterator for GridScanner<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        while let Some((row, col)) = self.next_position() {
            if let Some(candidate) = self.candidate_at(row, col) {
                return Some(candidate);
            }
        }
        None
    }
}

impl std::iter::FusedIterator for GridScanner<'_> {}
