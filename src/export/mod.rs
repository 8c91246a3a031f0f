//! Export of extraction results.
//!
//! Currently CSV only, in the column order date, name, start, end, hours.

mod csv;

pub use csv::{CSV_FILE_NAME, CSV_HEADER, to_csv_string, write_csv};
