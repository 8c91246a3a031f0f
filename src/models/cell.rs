//! Cell values as handed over by the spreadsheet loader.
//!
//! Spreadsheet cells arrive dynamically typed: blanks, booleans, numbers
//! (including date serials) and text. Every matching rule in the engine works
//! on the trimmed textual form produced by [`Cell::to_text`], so this is the
//! single place where cell typing is resolved.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell.
///
/// Deserializes from any JSON scalar: `null`, a boolean, a number or a string.
///
/// # Example
///
/// ```
/// use shift_extractor::models::Cell;
///
/// let cells: Vec<Cell> = serde_json::from_str(r#"[null, 15, 15.0, " 9-18 "]"#).unwrap();
/// let texts: Vec<_> = cells.iter().map(|c| c.to_text().into_owned()).collect();
/// assert_eq!(texts, vec!["", "15", "15.0", "9-18"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// A blank cell.
    #[default]
    Empty,
    /// A boolean cell.
    Bool(bool),
    /// A numeric cell, kept in its JSON rendering.
    Number(serde_json::Number),
    /// A text cell.
    Text(String),
}

impl Cell {
    /// Returns the trimmed textual form of the cell.
    ///
    /// Text cells borrow; every other kind is rendered into an owned string.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Cell::Empty => Cow::Borrowed(""),
            Cell::Bool(b) => Cow::Owned(b.to_string()),
            Cell::Number(n) => Cow::Owned(n.to_string()),
            Cell::Text(s) => Cow::Borrowed(s.trim()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value.into())
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}
