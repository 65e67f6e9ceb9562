//! Integration tests for the bell-schedule ticker.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use hallpass_core::schedule::{iso_week_number, BEFORE_SCHOOL_LABEL, SCHOOL_OUT_LABEL};
use hallpass_core::{
    classify_day_type, resolve_current_block, BellSchedule, BlockDefinition, CustomSchedule,
    DayType, ResolvedBlock, ScheduleStatus,
};

fn at(date: NaiveDate, h: u32, m: u32, s: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, s).unwrap()
}

#[test]
fn single_period_boundaries() {
    let schedule = vec![BlockDefinition::new("Period 1", "08:05", "09:40").unwrap()];
    let today = NaiveDate::from_ymd_opt(2024, 9, 9).unwrap();

    let active = resolve_current_block(&schedule, at(today, 8, 5, 0));
    assert_eq!(active.kind(), "active");
    assert_eq!(active.name(), "Period 1");

    let before = resolve_current_block(&schedule, at(today, 7, 59, 59));
    assert!(matches!(before, ResolvedBlock::BeforeSchool { .. }));
    assert_eq!(before.name(), BEFORE_SCHOOL_LABEL);

    let out = resolve_current_block(&schedule, at(today, 9, 40, 0));
    assert!(matches!(out, ResolvedBlock::SchoolOut { .. }));
    assert_eq!(out.name(), SCHOOL_OUT_LABEL);
}

#[test]
fn ticker_walks_a_full_school_day() {
    let bell = BellSchedule::standard();
    let monday = NaiveDate::from_ymd_opt(2024, 9, 9).unwrap();
    let custom = CustomSchedule {
        a: ["Biology".into(), "Algebra II".into(), "History".into(), "Art".into()],
        b: Default::default(),
    };

    let mut seen = Vec::new();
    let mut now = at(monday, 6, 0, 0);
    while now < at(monday, 17, 0, 0) {
        let status = ScheduleStatus::at(&bell, Some(&custom), now);
        if seen.last() != Some(&status.display_name) {
            seen.push(status.display_name.clone());
        }
        if let Some(ms) = status.remaining_ms {
            assert!(ms > 0, "non-positive countdown at {now}");
        }
        now += Duration::minutes(1);
    }

    assert_eq!(
        seen,
        [
            "Before school",
            "Biology",
            "Passing",
            "Algebra II",
            "Lunch",
            "Passing",
            "History",
            "Passing",
            "Art",
            "School is out!",
        ]
    );
}

#[test]
fn b_day_uses_b_names() {
    let bell = BellSchedule::standard();
    let tuesday = NaiveDate::from_ymd_opt(2024, 9, 10).unwrap();
    let custom = CustomSchedule {
        a: Default::default(),
        b: ["Chemistry".into(), String::new(), String::new(), String::new()],
    };
    let status = ScheduleStatus::at(&bell, Some(&custom), at(tuesday, 8, 30, 0));
    assert_eq!(status.day_type, DayType::B);
    assert_eq!(status.display_name, "Chemistry");
    assert_eq!(status.countdown.as_deref(), Some("1h 10m 00s"));
}

#[test]
fn fridays_alternate_across_a_school_year() {
    let mut friday = NaiveDate::from_ymd_opt(2024, 8, 30).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();
    while friday < end {
        let next = friday + Duration::days(7);
        assert_ne!(
            classify_day_type(friday),
            classify_day_type(next),
            "{friday} and {next} (weeks {} and {})",
            iso_week_number(friday),
            iso_week_number(next)
        );
        friday = next;
    }
}

#[test]
fn weekends_have_no_ticker_countdown() {
    let bell = BellSchedule::standard();
    let sunday = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
    let status = ScheduleStatus::at(&bell, None, at(sunday, 9, 0, 0));
    assert_eq!(status.day_type, DayType::Weekend);
    assert_eq!(status.countdown, None);
}
