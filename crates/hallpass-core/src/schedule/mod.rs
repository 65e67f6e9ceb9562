//! Bell-schedule engine.
//!
//! Pure functions from a wall-clock instant and the static bell schedule to
//! the ticker's view of the day: the current block, the A/B day type, the
//! countdown string and the student's own class names.

mod block;
mod countdown;
mod day_type;
mod personalize;
mod resolve;
mod ticker;

pub use block::{format_clock, parse_clock, BellSchedule, BlockDefinition};
pub use countdown::format_countdown;
pub use day_type::{classify_day_type, iso_week_number, DayType};
pub use personalize::{display_name, CustomSchedule, PERIOD_COUNT};
pub use resolve::{
    resolve_current_block, ResolvedBlock, BEFORE_SCHOOL_LABEL, IDLE_LABEL, SCHOOL_OUT_LABEL,
};
pub use ticker::ScheduleStatus;
