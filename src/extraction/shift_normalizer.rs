//! Time-range normalization.
//!
//! Timesheet cells hold loosely-formatted ranges such as `9-18`, `9:30-18`,
//! `2230 - 600` or `早番 8:00-17:00`. [`normalize_shift`] finds the first
//! range in the text, renders both ends as "H:MM" and computes the elapsed
//! hours, rolling the end over to the next day when it precedes the start.

use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;
use rust_decimal::Decimal;

use super::digits::to_ascii_digits;

/// Two clock times separated by a hyphen. Each clock time is 1-2 hour
/// digits, an optional colon and optionally exactly 2 minute digits.
/// `\d` is any Unicode decimal digit.
static TIME_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}):?(\d{2})?\s?-\s?(\d{1,2}):?(\d{2})?")
        .expect("time range pattern is valid")
});

const SECONDS_PER_HOUR: i64 = 3600;

/// The canonical form of a parsed time range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedShift {
    /// Start time as "H:MM".
    pub start_time: String,
    /// End time as "H:MM".
    pub end_time: String,
    /// Elapsed hours after rollover, rounded to 2 decimal places.
    pub duration_hours: Decimal,
}

/// A clock time as written in the cell. Hours and minutes are not
/// range-checked: `25:00` is hour 25.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClockTime {
    hour: String,
    minute: String,
}

impl ClockTime {
    fn new(hour: &str, minute: Option<&str>) -> Option<Self> {
        Some(Self {
            hour: to_ascii_digits(hour)?,
            minute: match minute {
                Some(m) => to_ascii_digits(m)?,
                None => "00".to_string(),
            },
        })
    }

    fn offset(&self) -> Option<Duration> {
        let hours: i64 = self.hour.parse().ok()?;
        let minutes: i64 = self.minute.parse().ok()?;
        Some(Duration::hours(hours) + Duration::minutes(minutes))
    }

    fn render(&self) -> String {
        format!("{}:{}", self.hour, self.minute)
    }
}

/// Parses a free-form time-range string.
///
/// Returns `None` when the text contains no time range; this is the usual
/// outcome for headers, blanks and notes such as `休み`.
///
/// # Examples
///
/// ```
/// use shift_extractor::extraction::normalize_shift;
/// use rust_decimal::Decimal;
///
/// let shift = normalize_shift("22:30-6:00").unwrap();
/// assert_eq!(shift.start_time, "22:30");
/// assert_eq!(shift.end_time, "6:00");
/// assert_eq!(shift.duration_hours, Decimal::new(75, 1));
///
/// assert!(normalize_shift("休み").is_none());
/// ```
pub fn normalize_shift(raw: &str) -> Option<NormalizedShift> {
    let caps = TIME_RANGE_RE.captures(raw)?;

    let start = ClockTime::new(
        caps.get(1)?.as_str(),
        caps.get(2).map(|m| m.as_str()),
    )?;
    let end = ClockTime::new(
        caps.get(3)?.as_str(),
        caps.get(4).map(|m| m.as_str()),
    )?;

    let start_offset = start.offset()?;
    let mut end_offset = end.offset()?;
    if end_offset < start_offset {
        end_offset += Duration::days(1);
    }

    let elapsed_seconds = (end_offset - start_offset).num_seconds();
    let duration_hours = (Decimal::from(elapsed_seconds) / Decimal::from(SECONDS_PER_HOUR))
        .round_dp(2);

    Some(NormalizedShift {
        start_time: start.render(),
        end_time: end.render(),
        duration_hours,
    })
}
