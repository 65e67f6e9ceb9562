use serde::{Deserialize, Serialize};

use super::day_type::DayType;

/// Number of class periods that can be renamed per day type.
pub const PERIOD_COUNT: usize = 4;

/// A student's own class names for Period 1..4 on A and B days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSchedule {
    #[serde(default)]
    pub a: [String; PERIOD_COUNT],
    #[serde(default)]
    pub b: [String; PERIOD_COUNT],
}

impl CustomSchedule {
    /// Custom name for a 1-indexed period, if one is set.
    pub fn class_name(&self, day_type: DayType, period: usize) -> Option<&str> {
        let names = match day_type {
            DayType::A => &self.a,
            DayType::B => &self.b,
            DayType::Weekend => return None,
        };
        let name = names.get(period.checked_sub(1)?)?.trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Period number for names of the form `"Period N"` with N in 1..=4.
fn period_number(block_name: &str) -> Option<usize> {
    let n: usize = block_name.strip_prefix("Period ")?.parse().ok()?;
    (1..=PERIOD_COUNT).contains(&n).then_some(n)
}

/// Name shown on the ticker for a resolved block.
///
/// `"Period N"` becomes the student's class name for that period on the
/// current day type when one is set. Everything else passes through.
pub fn display_name(
    block_name: &str,
    day_type: DayType,
    custom: Option<&CustomSchedule>,
) -> String {
    custom
        .zip(period_number(block_name))
        .and_then(|(custom, n)| custom.class_name(day_type, n))
        .unwrap_or(block_name)
        .to_string()
}
