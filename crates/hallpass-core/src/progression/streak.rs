use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Minutes of focus in one calendar day needed to keep a streak alive.
pub const DAILY_STREAK_THRESHOLD_MIN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakCheck {
    pub is_continuing: bool,
    /// Calendar days between the last credited day and today.
    pub delta_days: i64,
}

/// Compare the last credited day with `today` by calendar date.
///
/// - no prior day: a fresh streak, continuing
/// - same day: continuing, already counted
/// - yesterday: continuing, increment
/// - older: broken
///
/// A last date in the future (clock skew) is treated like the same day.
pub fn check_streak_continuation(
    last_focus_date: Option<NaiveDateTime>,
    today: NaiveDate,
) -> StreakCheck {
    let Some(last) = last_focus_date else {
        return StreakCheck {
            is_continuing: true,
            delta_days: 0,
        };
    };
    let delta_days = (today - last.date()).num_days();
    StreakCheck {
        is_continuing: delta_days <= 1,
        delta_days,
    }
}

/// Streak value after crediting `today`.
pub fn next_streak(current: u32, check: StreakCheck, had_prior: bool) -> u32 {
    if !had_prior || !check.is_continuing {
        return 1;
    }
    if check.delta_days <= 0 {
        current.max(1)
    } else {
        current.saturating_add(1)
    }
}
