//! Per-user gamification record and the session-completion step.
//!
//! [`complete_focus_session`] takes the full prior state and returns the
//! full next state. It is deliberately not idempotent: calling it twice for
//! the same session credits XP and minutes twice, so the host must call it
//! exactly once per completed session.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::level::{calculate_level, calculate_progress_to_next_level, calculate_xp_for_next_level};
use super::reward::{calculate_session_xp, seconds_to_minutes};
use super::streak::{check_streak_continuation, next_streak, DAILY_STREAK_THRESHOLD_MIN};
use crate::events::Event;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GamificationState {
    pub xp: u64,
    /// Cached for display; [`calculate_level`] of `xp` is the source of truth.
    pub level: u32,
    pub current_streak: u32,
    /// When today's (or the most recent) streak credit was earned.
    #[serde(with = "iso_timestamp")]
    pub last_focus_date: Option<NaiveDateTime>,
    pub daily_focus_minutes: f64,
    pub total_focus_minutes: f64,
    /// Calendar day that `daily_focus_minutes` belongs to. When `None`, see
    /// [`GamificationState::minutes_day`].
    pub daily_minutes_date: Option<NaiveDate>,
}

impl Default for GamificationState {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            current_streak: 0,
            last_focus_date: None,
            daily_focus_minutes: 0.0,
            total_focus_minutes: 0.0,
            daily_minutes_date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub level: u32,
    pub xp: u64,
    pub next_level_xp: u64,
    pub xp_to_next_level: u64,
    pub progress_pct: f64,
}

impl GamificationState {
    /// Lazy daily reset: a copy whose daily minutes are zero if they were
    /// accumulated on an earlier day.
    pub fn normalized_for(&self, today: NaiveDate) -> Self {
        let mut next = self.clone();
        match self.minutes_day() {
            Some(day) if day != today => {
                tracing::debug!(
                    %day,
                    %today,
                    minutes = self.daily_focus_minutes,
                    "resetting daily focus minutes"
                );
                next.daily_focus_minutes = 0.0;
                next.daily_minutes_date = Some(today);
            }
            _ => {}
        }
        next.level = calculate_level(next.xp);
        next
    }

    /// Day the stored daily minutes belong to.
    ///
    /// Records without a day stamp are inferred: minutes that already reach
    /// the streak threshold were credited on `last_focus_date`'s day. Below
    /// the threshold the minutes are taken as today's.
    pub fn minutes_day(&self) -> Option<NaiveDate> {
        self.daily_minutes_date.or_else(|| {
            self.last_focus_date
                .filter(|_| self.daily_focus_minutes >= DAILY_STREAK_THRESHOLD_MIN)
                .map(|d| d.date())
        })
    }

    pub fn progress_summary(&self) -> ProgressSummary {
        let level = calculate_level(self.xp);
        let next_level_xp = calculate_xp_for_next_level(level);
        ProgressSummary {
            level,
            xp: self.xp,
            next_level_xp,
            xp_to_next_level: next_level_xp.saturating_sub(self.xp),
            progress_pct: calculate_progress_to_next_level(self.xp, level),
        }
    }

    /// Whether the streak has already been credited on `today`.
    pub fn credited_on(&self, today: NaiveDate) -> bool {
        self.last_focus_date.is_some_and(|d| d.date() == today)
    }
}

/// Result of one completed focus session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub state: GamificationState,
    pub earned_xp: u64,
    pub leveled_up: bool,
    pub streak_credited: bool,
    pub events: Vec<Event>,
}

/// Apply a finished focus session of `elapsed_seconds` ending at `now`.
pub fn complete_focus_session(
    prior: &GamificationState,
    elapsed_seconds: f64,
    now: NaiveDateTime,
) -> SessionOutcome {
    let today = now.date();
    let session_minutes = seconds_to_minutes(elapsed_seconds);
    let earned_xp = calculate_session_xp(elapsed_seconds);
    let mut events = vec![Event::SessionCompleted {
        elapsed_secs: session_minutes * 60.0,
        earned_xp,
        at: now,
    }];

    let minutes_are_today = prior.minutes_day().map_or(true, |d| d == today);
    let daily_focus_minutes = if minutes_are_today {
        prior.daily_focus_minutes + session_minutes
    } else {
        session_minutes
    };

    let mut current_streak = prior.current_streak;
    let mut last_focus_date = prior.last_focus_date;
    let mut streak_credited = false;
    if daily_focus_minutes >= DAILY_STREAK_THRESHOLD_MIN && !prior.credited_on(today) {
        let check = check_streak_continuation(prior.last_focus_date, today);
        current_streak = next_streak(prior.current_streak, check, prior.last_focus_date.is_some());
        last_focus_date = Some(now);
        streak_credited = true;

        if !check.is_continuing && prior.current_streak > 0 {
            events.push(Event::StreakReset {
                previous: prior.current_streak,
                at: now,
            });
        }
        events.push(Event::StreakExtended {
            streak: current_streak,
            at: now,
        });
        tracing::debug!(
            streak = current_streak,
            delta_days = check.delta_days,
            "streak credited"
        );
    }

    let xp = prior.xp.saturating_add(earned_xp);
    let level = calculate_level(xp);
    let leveled_up = level > prior.level;
    if leveled_up {
        events.push(Event::LevelUp {
            from: prior.level,
            to: level,
            at: now,
        });
        tracing::debug!(from = prior.level, to = level, "level up");
    }

    SessionOutcome {
        state: GamificationState {
            xp,
            level,
            current_streak,
            last_focus_date,
            daily_focus_minutes,
            total_focus_minutes: prior.total_focus_minutes + session_minutes,
            daily_minutes_date: Some(today),
        },
        earned_xp,
        leveled_up,
        streak_credited,
        events,
    }
}

/// Timestamps as ISO-8601. Reads both naive local timestamps and RFC 3339
/// strings with an offset, as written by browser `toISOString()`. Offset
/// timestamps are converted to the host's local wall time so calendar days
/// compare at local midnight.
mod iso_timestamp {
    use chrono::{DateTime, Local, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(v: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(dt) => s.serialize_str(&dt.format(FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(d)? else {
            return Ok(None);
        };
        if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, FORMAT) {
            return Ok(Some(dt));
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Some(dt.with_timezone(&Local).naive_local()))
            .map_err(serde::de::Error::custom)
    }
}
