//! A/B day rotation.
//!
//! Monday and Wednesday are always A days, Tuesday and Thursday are always
//! B days. Fridays alternate with the ISO week number: odd weeks are B,
//! even weeks are A.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    A,
    B,
    Weekend,
}

impl DayType {
    pub fn is_school_day(self) -> bool {
        !matches!(self, DayType::Weekend)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DayType::A => "A",
            DayType::B => "B",
            DayType::Weekend => "Weekend",
        };
        f.write_str(s)
    }
}

/// Classify a calendar date.
pub fn classify_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        Weekday::Mon | Weekday::Wed => DayType::A,
        Weekday::Tue | Weekday::Thu => DayType::B,
        Weekday::Fri => {
            if iso_week_number(date) % 2 == 1 {
                DayType::B
            } else {
                DayType::A
            }
        }
    }
}

/// ISO-8601 week number (1..=53).
///
/// The week belongs to the year containing its Thursday, so the date is
/// moved to that Thursday and weeks are counted from January 1st of the
/// Thursday's year. A new date is built; the input is never modified.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    let offset = 3 - i64::from(date.weekday().num_days_from_monday());
    let thursday = date + Duration::days(offset);
    thursday.ordinal0() / 7 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn fixed_weekdays() {
        // 2024-09-09 is a Monday.
        assert_eq!(classify_day_type(d(2024, 9, 9)), DayType::A);
        assert_eq!(classify_day_type(d(2024, 9, 10)), DayType::B);
        assert_eq!(classify_day_type(d(2024, 9, 11)), DayType::A);
        assert_eq!(classify_day_type(d(2024, 9, 12)), DayType::B);
        assert_eq!(classify_day_type(d(2024, 9, 14)), DayType::Weekend);
        assert_eq!(classify_day_type(d(2024, 9, 15)), DayType::Weekend);
    }

    #[test]
    fn fridays_alternate_by_week_parity() {
        // 2024-09-13 falls in ISO week 37.
        assert_eq!(iso_week_number(d(2024, 9, 13)), 37);
        assert_eq!(classify_day_type(d(2024, 9, 13)), DayType::B);
        assert_eq!(classify_day_type(d(2024, 9, 20)), DayType::A);
        assert_eq!(classify_day_type(d(2024, 9, 27)), DayType::B);
    }

    #[test]
    fn year_boundary_weeks() {
        // 2021-01-01 is a Friday in ISO week 53 of 2020.
        assert_eq!(iso_week_number(d(2021, 1, 1)), 53);
        assert_eq!(classify_day_type(d(2021, 1, 1)), DayType::B);
        // One week later: week 1 of 2021, also odd.
        assert_eq!(iso_week_number(d(2021, 1, 8)), 1);
        assert_eq!(classify_day_type(d(2021, 1, 8)), DayType::B);
        // 2025-01-03 is a Friday in week 1, and 2024-12-30 already belongs to it.
        assert_eq!(iso_week_number(d(2024, 12, 30)), 1);
        assert_eq!(iso_week_number(d(2025, 1, 3)), 1);
        assert_eq!(classify_day_type(d(2024, 12, 27)), DayType::A);
        assert_eq!(classify_day_type(d(2025, 1, 3)), DayType::B);
    }

    #[test]
    fn display_matches_serde() {
        for t in [DayType::A, DayType::B, DayType::Weekend] {
            assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{t}\""));
        }
    }

    proptest! {
        #[test]
        fn iso_week_agrees_with_chrono(days in 0i64..200_000) {
            let date = d(1900, 1, 1) + Duration::days(days);
            prop_assert_eq!(iso_week_number(date), date.iso_week().week());
        }

        #[test]
        fn fridays_one_week_apart_differ_within_a_year(days in 0i64..60_000) {
            let start = d(1950, 1, 6) + Duration::days(days * 7);
            let next = start + Duration::days(7);
            prop_assume!(iso_week_number(next) != 1);
            prop_assert_ne!(classify_day_type(start), classify_day_type(next));
        }
    }
}
