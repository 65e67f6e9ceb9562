//! # Hallpass Core Library
//!
//! The deterministic parts of the school portal dashboard: the bell-schedule
//! ticker and the focus-timer progression model. The portal host (here the
//! `hallpass` CLI) owns the clock and the persistence; this crate only
//! computes.
//!
//! ## Architecture
//!
//! - **Schedule Engine**: resolves an instant against the bell schedule,
//!   classifies A/B days and formats countdowns. The caller polls it; it
//!   keeps no timers of its own.
//! - **Progression Engine**: XP, levels, streaks and daily focus minutes,
//!   updated by a single pure session-completion step.
//! - **Sessions**: a caller-owned registry of per-user chat sessions.
//! - **Storage**: TOML configuration and the local JSON progress file.
//!
//! ## Key Components
//!
//! - [`ScheduleStatus`]: ticker snapshot for one instant
//! - [`complete_focus_session`]: prior state + elapsed time -> next state
//! - [`Config`]: bell schedule and class-name configuration
//! - [`ProgressStore`]: local gamification state persistence

pub mod error;
pub mod events;
pub mod progression;
pub mod schedule;
pub mod sessions;
pub mod storage;

pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use progression::{complete_focus_session, GamificationState, ProgressSummary, SessionOutcome};
pub use schedule::{
    classify_day_type, format_countdown, resolve_current_block, BellSchedule, BlockDefinition,
    CustomSchedule, DayType, ResolvedBlock, ScheduleStatus,
};
pub use sessions::{ChatSession, SessionRegistry};
pub use storage::{Config, ProgressStore};
