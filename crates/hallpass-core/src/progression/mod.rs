//! Focus-session progression: XP, levels, streaks and daily minutes.
//!
//! Everything here is plain arithmetic over the values passed in. The
//! current time is always a parameter so the host decides what "today" is.

mod level;
mod reward;
mod state;
mod streak;

pub use level::{
    calculate_level, calculate_progress_to_next_level, calculate_xp_for_next_level, level_floor,
    XP_SCALE,
};
pub use reward::{
    calculate_session_xp, seconds_to_minutes, DEEP_WORK_BONUS_XP, DEEP_WORK_THRESHOLD_MIN,
    POMODORO_BONUS_XP, POMODORO_THRESHOLD_MIN, XP_PER_MINUTE,
};
pub use state::{complete_focus_session, GamificationState, ProgressSummary, SessionOutcome};
pub use streak::{check_streak_continuation, next_streak, StreakCheck, DAILY_STREAK_THRESHOLD_MIN};
