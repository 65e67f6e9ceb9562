use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Things the host UI may want to celebrate after a focus session.
/// Emitted by [`complete_focus_session`](crate::progression::complete_focus_session);
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionCompleted {
        elapsed_secs: f64,
        earned_xp: u64,
        at: NaiveDateTime,
    },
    LevelUp {
        from: u32,
        to: u32,
        at: NaiveDateTime,
    },
    /// Today's focus crossed the daily threshold for the first time.
    StreakExtended {
        streak: u32,
        at: NaiveDateTime,
    },
    /// A missed day broke the previous streak; a new one starts at 1.
    StreakReset {
        previous: u32,
        at: NaiveDateTime,
    },
}
