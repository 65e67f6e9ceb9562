pub mod config;
pub mod progress;
pub mod schedule;

use chrono::{Local, NaiveDate, NaiveDateTime};
use hallpass_core::DayType;

/// Current local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse `YYYY-MM-DD HH:MM[:SS]` (a `T` separator is accepted too).
pub fn parse_instant(raw: &str) -> Result<NaiveDateTime, Box<dyn std::error::Error>> {
    let normalized = raw.trim().replacen('T', " ", 1);
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Ok(dt);
        }
    }
    Err(format!("cannot parse '{raw}' as YYYY-MM-DD HH:MM[:SS]").into())
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| format!("cannot parse '{raw}' as YYYY-MM-DD: {e}").into())
}

/// School day type from `a` / `b`, case-insensitive.
pub fn parse_day_type(raw: &str) -> Result<DayType, Box<dyn std::error::Error>> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "a" => Ok(DayType::A),
        "b" => Ok(DayType::B),
        other => Err(format!("unknown day type '{other}', expected a or b").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_instants() {
        let expected = NaiveDate::from_ymd_opt(2024, 9, 9)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap();
        assert_eq!(parse_instant("2024-09-09 08:05").unwrap(), expected);
        assert_eq!(parse_instant("2024-09-09T08:05:00").unwrap(), expected);
        assert!(parse_instant("09/09/2024 8am").is_err());
    }

    #[test]
    fn parses_day_types() {
        assert_eq!(parse_day_type("A").unwrap(), DayType::A);
        assert_eq!(parse_day_type(" b ").unwrap(), DayType::B);
        assert!(parse_day_type("weekend").is_err());
    }
}
