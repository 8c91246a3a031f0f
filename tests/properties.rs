//! Property tests for time-range normalization, date inference and totals.

use proptest::prelude::*;
use rust_decimal::Decimal;

use shift_extractor::config::ScannerConfig;
use shift_extractor::extraction::{extract_shifts, infer_date, normalize_shift};
use shift_extractor::models::{Cell, Grid, ShiftTotals};

const NAME: &str = "宇都宮美香";

fn expected_hours(minutes: i64) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
}

/// A cell that is never a bare 1-2 digit number.
fn non_day_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z月火水木金土日]{1,4}",
        "[0-9]{3,5}",
        "[0-9]{1,2}\\.[0-9]",
    ]
}

/// A timesheet cell: blank, a name, a time range or a note.
fn sheet_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(NAME.to_string()),
        Just("休み".to_string()),
        (0u32..24, 0u32..60, 0u32..24, 0u32..60)
            .prop_map(|(sh, sm, eh, em)| format!("{}:{:02}-{}:{:02}", sh, sm, eh, em)),
        "[0-9]{1,2}",
    ]
}

fn sheet() -> impl Strategy<Value = Grid> {
    prop::collection::vec(prop::collection::vec(sheet_cell(), 0..8), 0..16).prop_map(|rows| {
        Grid::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Cell::from).collect())
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn same_day_duration_is_difference(
        sh in 0i64..24, sm in 0i64..60, eh in 0i64..24, em in 0i64..60
    ) {
        let start = sh * 60 + sm;
        let end = eh * 60 + em;
        prop_assume!(start <= end);

        let shift = normalize_shift(&format!("{}:{:02}-{}:{:02}", sh, sm, eh, em)).unwrap();
        prop_assert_eq!(shift.duration_hours, expected_hours(end - start));
        prop_assert_eq!(shift.start_time, format!("{}:{:02}", sh, sm));
        prop_assert_eq!(shift.end_time, format!("{}:{:02}", eh, em));
    }

    #[test]
    fn earlier_end_rolls_over_midnight(
        sh in 0i64..24, sm in 0i64..60, eh in 0i64..24, em in 0i64..60
    ) {
        let start = sh * 60 + sm;
        let end = eh * 60 + em;
        prop_assume!(end < start);

        let shift = normalize_shift(&format!("{}:{:02}-{}:{:02}", sh, sm, eh, em)).unwrap();
        prop_assert_eq!(shift.duration_hours, expected_hours(end + 24 * 60 - start));
    }

    #[test]
    fn duration_is_never_negative(raw in "[0-9]{1,2}:?[0-9]{0,2} ?- ?[0-9]{1,2}:?[0-9]{0,2}") {
        if let Some(shift) = normalize_shift(&raw) {
            prop_assert!(shift.duration_hours >= Decimal::ZERO);
        }
    }

    #[test]
    fn text_without_digits_never_parses(raw in "\\PN*") {
        prop_assert!(normalize_shift(&raw).is_none());
    }

    #[test]
    fn no_day_number_above_means_no_date(
        above in prop::collection::vec(non_day_text(), 0..6)
    ) {
        let mut rows: Vec<Vec<Cell>> = above.into_iter().map(|t| vec![Cell::from(t)]).collect();
        rows.push(vec![Cell::from(NAME)]);
        let row = rows.len() - 1;
        let grid = Grid::new(rows);

        prop_assert_eq!(infer_date(&grid, row, 0, &[3, 4], 2), None);
    }

    #[test]
    fn totals_match_records(grid in sheet()) {
        let result = extract_shifts(&grid, NAME, &ScannerConfig::default()).unwrap();

        prop_assert_eq!(result.totals.shift_count, result.records.len());
        prop_assert_eq!(&result.totals, &ShiftTotals::from_records(&result.records));
        prop_assert_eq!(result.found, !result.records.is_empty());
    }

    #[test]
    fn rescanning_is_idempotent(grid in sheet()) {
        let config = ScannerConfig::default();
        let first = extract_shifts(&grid, NAME, &config).unwrap();
        let second = extract_shifts(&grid, NAME, &config).unwrap();

        prop_assert_eq!(first.records, second.records);
        prop_assert_eq!(first.totals, second.totals);
    }
}
