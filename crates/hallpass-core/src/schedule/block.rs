use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::day_type::DayType;
use crate::error::ValidationError;

/// A named interval of the school day, e.g. "Period 1" from 08:05 to 09:40.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDefinition {
    pub name: String,
    #[serde(with = "clock")]
    pub start: NaiveTime,
    #[serde(with = "clock")]
    pub end: NaiveTime,
}

impl BlockDefinition {
    /// Build a block from `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedClock`] if either time is not `HH:MM`.
    pub fn new(
        name: impl Into<String>,
        start: &str,
        end: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.into(),
            start: parse_clock(start)?,
            end: parse_clock(end)?,
        })
    }

    /// Length of the block in minutes.
    pub fn duration_min(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Parse a 24-hour `HH:MM` clock string.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedClock`] for anything else, including
/// out-of-range hours or minutes.
pub fn parse_clock(s: &str) -> Result<NaiveTime, ValidationError> {
    let malformed = || ValidationError::MalformedClock(s.to_string());

    let (h, m) = s.trim().split_once(':').ok_or_else(malformed)?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return Err(malformed());
    }
    let hour: u32 = h.parse().map_err(|_| malformed())?;
    let minute: u32 = m.parse().map_err(|_| malformed())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// Render a time as zero-padded `HH:MM`.
pub fn format_clock(t: NaiveTime) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Serde adapter storing [`NaiveTime`] as `"HH:MM"`.
mod clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_clock(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_clock(&raw).map_err(serde::de::Error::custom)
    }
}

/// The static bell schedule shared by A and B days.
///
/// Weekends have no blocks. The list is configuration: it is validated once
/// when loaded and never mutated while the ticker runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BellSchedule {
    pub blocks: Vec<BlockDefinition>,
}

impl BellSchedule {
    /// Create a schedule after checking ordering and overlap.
    ///
    /// # Errors
    ///
    /// See [`BellSchedule::validate`].
    pub fn new(blocks: Vec<BlockDefinition>) -> Result<Self, ValidationError> {
        let schedule = Self { blocks };
        schedule.validate()?;
        Ok(schedule)
    }

    /// The regular school day.
    pub fn standard() -> Self {
        let block = |name: &str, start: &str, end: &str| {
            BlockDefinition::new(name, start, end).expect("built-in bell time is HH:MM")
        };
        Self {
            blocks: vec![
                block("Period 1", "08:05", "09:40"),
                block("Passing", "09:40", "09:50"),
                block("Period 2", "09:50", "11:25"),
                block("Lunch", "11:25", "12:05"),
                block("Passing", "12:05", "12:15"),
                block("Period 3", "12:15", "13:50"),
                block("Passing", "13:50", "14:00"),
                block("Period 4", "14:00", "15:35"),
            ],
        }
    }

    /// Blocks in effect for a day type. Empty on weekends.
    pub fn for_day(&self, day_type: DayType) -> &[BlockDefinition] {
        match day_type {
            DayType::Weekend => &[],
            DayType::A | DayType::B => &self.blocks,
        }
    }

    /// Check that every block is non-empty, ends after it starts and that
    /// blocks are sorted without overlap. Back-to-back blocks are allowed.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for b in &self.blocks {
            if b.name.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "bell.blocks.name".into(),
                    message: "block name must not be empty".into(),
                });
            }
            if b.end <= b.start {
                return Err(ValidationError::InvalidBlock {
                    name: b.name.clone(),
                    start: format_clock(b.start),
                    end: format_clock(b.end),
                });
            }
        }
        for pair in self.blocks.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(ValidationError::OverlappingBlocks {
                    earlier: pair[0].name.clone(),
                    later: pair[1].name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for BellSchedule {
    fn default() -> Self {
        Self::standard()
    }
}
