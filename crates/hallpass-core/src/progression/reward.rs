/// XP per focused minute.
pub const XP_PER_MINUTE: f64 = 10.0;
/// Bonus for finishing a full Pomodoro.
pub const POMODORO_BONUS_XP: f64 = 50.0;
pub const POMODORO_THRESHOLD_MIN: f64 = 25.0;
/// Bonus for a deep-work session, on top of the Pomodoro bonus.
pub const DEEP_WORK_BONUS_XP: f64 = 100.0;
pub const DEEP_WORK_THRESHOLD_MIN: f64 = 50.0;

/// Convert a seconds count into fractional minutes, treating negative and
/// non-finite input as zero.
pub fn seconds_to_minutes(duration_seconds: f64) -> f64 {
    if duration_seconds.is_finite() && duration_seconds > 0.0 {
        duration_seconds / 60.0
    } else {
        0.0
    }
}

/// XP awarded for a focus session lasting `duration_seconds`.
pub fn calculate_session_xp(duration_seconds: f64) -> u64 {
    let minutes = seconds_to_minutes(duration_seconds);
    let mut xp = minutes * XP_PER_MINUTE;
    if minutes >= POMODORO_THRESHOLD_MIN {
        xp += POMODORO_BONUS_XP;
    }
    if minutes >= DEEP_WORK_THRESHOLD_MIN {
        xp += DEEP_WORK_BONUS_XP;
    }
    xp.round() as u64
}
