//! One-shot ticker snapshot.
//!
//! The host calls [`ScheduleStatus::at`] on every poll with the current
//! wall-clock time. Nothing is cached between calls.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::block::BellSchedule;
use super::countdown::format_countdown;
use super::day_type::{classify_day_type, DayType};
use super::personalize::{display_name, CustomSchedule};
use super::resolve::{resolve_current_block, ResolvedBlock};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStatus {
    pub at: NaiveDateTime,
    pub day_type: DayType,
    pub block: ResolvedBlock,
    pub display_name: String,
    /// Milliseconds until the block ends; absent after school and in gaps.
    pub remaining_ms: Option<i64>,
    pub countdown: Option<String>,
}

impl ScheduleStatus {
    pub fn at(
        bell: &BellSchedule,
        custom: Option<&CustomSchedule>,
        now: NaiveDateTime,
    ) -> Self {
        let day_type = classify_day_type(now.date());
        let block = resolve_current_block(bell.for_day(day_type), now);
        let display_name = if block.is_active() {
            display_name(block.name(), day_type, custom)
        } else {
            block.name().to_string()
        };
        let remaining_ms = block.remaining(now).map(|d| d.num_milliseconds());

        Self {
            at: now,
            day_type,
            display_name,
            countdown: remaining_ms.map(format_countdown),
            remaining_ms,
            block,
        }
    }

    /// Single line for the dashboard ticker.
    pub fn headline(&self) -> String {
        match (&self.block, &self.countdown) {
            (ResolvedBlock::Active { .. }, Some(c)) => {
                format!("{} Day | {} | ends in {}", self.day_type, self.display_name, c)
            }
            (ResolvedBlock::BeforeSchool { .. }, Some(c)) => {
                format!("{} Day | {} | first bell in {}", self.day_type, self.display_name, c)
            }
            _ if self.day_type.is_school_day() => {
                format!("{} Day | {}", self.day_type, self.display_name)
            }
            _ => format!("{} | {}", self.day_type, self.display_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn monday(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn active_period_is_personalized() {
        let custom = CustomSchedule {
            a: ["Biology".into(), String::new(), String::new(), String::new()],
            ..Default::default()
        };
        let s = ScheduleStatus::at(&BellSchedule::standard(), Some(&custom), monday(9, 0, 0));
        assert_eq!(s.day_type, DayType::A);
        assert_eq!(s.display_name, "Biology");
        assert_eq!(s.remaining_ms, Some(40 * 60 * 1000));
        assert_eq!(s.countdown.as_deref(), Some("40m 00s"));
        assert_eq!(s.headline(), "A Day | Biology | ends in 40m 00s");
    }

    #[test]
    fn before_school_counts_down_to_first_bell() {
        let s = ScheduleStatus::at(&BellSchedule::standard(), None, monday(6, 4, 59));
        assert_eq!(s.display_name, "Before school");
        assert_eq!(s.countdown.as_deref(), Some("2h 00m 01s"));
    }

    #[test]
    fn after_school_has_no_countdown() {
        let s = ScheduleStatus::at(&BellSchedule::standard(), None, monday(16, 0, 0));
        assert_eq!(s.display_name, "School is out!");
        assert_eq!(s.countdown, None);
        assert_eq!(s.headline(), "A Day | School is out!");
    }

    #[test]
    fn weekend_is_idle() {
        let saturday = NaiveDate::from_ymd_opt(2024, 9, 14)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let s = ScheduleStatus::at(&BellSchedule::standard(), None, saturday);
        assert_eq!(s.day_type, DayType::Weekend);
        assert_eq!(s.block, ResolvedBlock::Idle);
        assert_eq!(s.headline(), "Weekend | No class");
    }
}
