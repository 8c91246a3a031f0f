//! CSV serialization of shift records.
//!
//! Columns are fixed: date, name, start time, end time, duration hours.

use std::io::{self, Write};

use crate::models::ShiftRecord;

/// Header row written before the records.
pub const CSV_HEADER: [&str; 5] = ["日付", "名前", "開始時間", "終了時間", "勤務時間（時間）"];

/// File name offered for the CSV download.
pub const CSV_FILE_NAME: &str = "fixed_work_hours.csv";

const SEPARATOR: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEPARATOR) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn push_row<S: AsRef<str>>(out: &mut String, row: &[S]) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

fn record_row(record: &ShiftRecord) -> [String; 5] {
    [
        record.date.clone().unwrap_or_default(),
        record.name.clone(),
        record.start_time.clone(),
        record.end_time.clone(),
        record.duration_hours.normalize().to_string(),
    ]
}

/// Writes the header and one row per record to `w`.
pub fn write_csv<W: Write>(mut w: W, records: &[ShiftRecord]) -> io::Result<()> {
    w.write_all(to_csv_string(records).as_bytes())?;
    w.flush()
}

/// Renders the records as a CSV string.
///
/// # Example
///
/// ```
/// use shift_extractor::export::to_csv_string;
/// use shift_extractor::models::ShiftRecord;
/// use rust_decimal::Decimal;
///
/// let records = vec![ShiftRecord {
///     date: Some("15".to_string()),
///     name: "宇都宮美香".to_string(),
///     start_time: "9:00".to_string(),
///     end_time: "18:00".to_string(),
///     duration_hours: Decimal::new(90, 1),
/// }];
/// let csv = to_csv_string(&records);
/// assert_eq!(csv.lines().nth(1), Some("15,宇都宮美香,9:00,18:00,9"));
/// ```
pub fn to_csv_string(records: &[ShiftRecord]) -> String {
    let mut out = String::new();
    push_row(&mut out, &CSV_HEADER);
    for record in records {
        push_row(&mut out, &record_row(record));
    }
    out
}
