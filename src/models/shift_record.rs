//! Shift record model.
//!
//! A [`ShiftRecord`] is one normalized work shift found in a timesheet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized work-shift entry.
///
/// Records are created only from time strings that normalize successfully.
/// The date is the day-of-month text found above the name cell and may be
/// absent.
///
/// # Example
///
/// ```
/// use shift_extractor::models::ShiftRecord;
/// use rust_decimal::Decimal;
///
/// let record = ShiftRecord {
///     date: Some("15".to_string()),
///     name: "宇都宮美香".to_string(),
///     start_time: "9:00".to_string(),
///     end_time: "18:00".to_string(),
///     duration_hours: Decimal::new(90, 1),
/// };
/// assert_eq!(record.duration_hours.to_string(), "9.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The inferred day-of-month, if one was found.
    pub date: Option<String>,
    /// The name that was searched for.
    pub name: String,
    /// The start time as "H:MM".
    pub start_time: String,
    /// The end time as "H:MM".
    pub end_time: String,
    /// Elapsed hours, rounded to 2 decimal places.
    pub duration_hours: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(start: &str, end: &str, hours: Decimal) -> ShiftRecord {
        ShiftRecord {
            date: Some("15".to_string()),
            name: "宇都宮美香".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            duration_hours: hours,
        }
    }

    #[test]
    fn test_serialization_uses_string_decimal() {
        let record = make_record("9:00", "18:00", Decimal::new(90, 1));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "15");
        assert_eq!(json["start_time"], "9:00");
        assert_eq!(json["duration_hours"], "9.0");
    }

    #[test]
    fn test_serialized_fields_are_the_record_columns() {
        let record = make_record("22:30", "6:00", Decimal::new(75, 1));
        let json = serde_json::to_value(&record).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["date", "duration_hours", "end_time", "name", "start_time"]
        );
    }

    #[test]
    fn test_absent_date_serializes_as_null() {
        let mut record = make_record("9:00", "18:00", Decimal::new(90, 1));
        record.date = None;
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["date"].is_null());
    }

    #[test]
    fn test_round_trip() {
        let record = make_record("22:30", "6:00", Decimal::new(75, 1));
        let json = serde_json::to_string(&record).unwrap();
        let back: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
