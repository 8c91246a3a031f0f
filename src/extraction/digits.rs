//! Unicode decimal digits.
//!
//! Timesheets are typed in whatever script the author's keyboard produced,
//! so day numbers and time ranges may use full-width (`１８`), Arabic-Indic
//! (`١٨`) or any other decimal digits (general category `Nd`). Every `Nd`
//! block is a run of complete `0..=9` sequences, which is what
//! [`digit_value`] relies on.

use std::sync::LazyLock;

use regex::Regex;

static DECIMAL_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\d\z").expect("digit pattern is valid"));

/// Returns true if `c` is a Unicode decimal digit.
pub(crate) fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || DECIMAL_DIGIT_RE.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Returns the numeric value of a Unicode decimal digit.
pub(crate) fn digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    // walk back to the start of the digit run
    let mut first = c;
    while let Some(prev) = char::from_u32(first as u32 - 1).filter(|p| is_decimal_digit(*p)) {
        first = prev;
    }
    Some((c as u32 - first as u32) % 10)
}

/// Rewrites a run of decimal digits with ASCII digits. Returns `None` if any
/// character is not a decimal digit.
pub(crate) fn to_ascii_digits(text: &str) -> Option<String> {
    text.chars()
        .map(|c| digit_value(c).and_then(|v| char::from_digit(v, 10)))
        .collect()
}
