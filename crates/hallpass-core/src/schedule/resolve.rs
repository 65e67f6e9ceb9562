//! Resolve "what is happening right now" against a day's blocks.
//!
//! Blocks are anchored to the calendar date of `now`. The first block with
//! `start <= now < end` wins. Outside every block the result says whether
//! school has not started yet, is over, or is in an unnamed gap.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::block::BlockDefinition;

pub const BEFORE_SCHOOL_LABEL: &str = "Before school";
pub const SCHOOL_OUT_LABEL: &str = "School is out!";
pub const IDLE_LABEL: &str = "No class";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedBlock {
    /// `now` falls inside a configured block.
    Active {
        name: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Before the first block of the day. `start` is the instant resolved.
    BeforeSchool {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// At or after the end of the last block. Zero-length span.
    SchoolOut { at: NaiveDateTime },
    /// No schedule for the day, or a gap between blocks.
    Idle,
}

impl ResolvedBlock {
    pub fn name(&self) -> &str {
        match self {
            ResolvedBlock::Active { name, .. } => name,
            ResolvedBlock::BeforeSchool { .. } => BEFORE_SCHOOL_LABEL,
            ResolvedBlock::SchoolOut { .. } => SCHOOL_OUT_LABEL,
            ResolvedBlock::Idle => IDLE_LABEL,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ResolvedBlock::Active { .. })
    }

    /// `"active"` or `"idle"`, the coarse tag used by older display code.
    pub fn kind(&self) -> &'static str {
        if self.is_active() {
            "active"
        } else {
            "idle"
        }
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        match self {
            ResolvedBlock::Active { start, .. } | ResolvedBlock::BeforeSchool { start, .. } => {
                Some(*start)
            }
            ResolvedBlock::SchoolOut { at } => Some(*at),
            ResolvedBlock::Idle => None,
        }
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        match self {
            ResolvedBlock::Active { end, .. } | ResolvedBlock::BeforeSchool { end, .. } => {
                Some(*end)
            }
            ResolvedBlock::SchoolOut { at } => Some(*at),
            ResolvedBlock::Idle => None,
        }
    }

    /// Time left until this block ends, if it has a meaningful end.
    pub fn remaining(&self, now: NaiveDateTime) -> Option<Duration> {
        match self {
            ResolvedBlock::Active { end, .. } | ResolvedBlock::BeforeSchool { end, .. } => {
                Some(*end - now)
            }
            ResolvedBlock::SchoolOut { .. } | ResolvedBlock::Idle => None,
        }
    }
}

/// Find the block containing `now`.
pub fn resolve_current_block(schedule: &[BlockDefinition], now: NaiveDateTime) -> ResolvedBlock {
    let today = now.date();

    for block in schedule {
        let start = today.and_time(block.start);
        let end = today.and_time(block.end);
        if start <= now && now < end {
            return ResolvedBlock::Active {
                name: block.name.clone(),
                start,
                end,
            };
        }
    }

    if let Some(first) = schedule.first() {
        let first_start = today.and_time(first.start);
        if now < first_start {
            return ResolvedBlock::BeforeSchool {
                start: now,
                end: first_start,
            };
        }
    }
    if let Some(last) = schedule.last() {
        let last_end = today.and_time(last.end);
        if now >= last_end {
            return ResolvedBlock::SchoolOut { at: last_end };
        }
    }

    ResolvedBlock::Idle
}
