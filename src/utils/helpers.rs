//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::NaiveTime;
use crate::utils::errors::{LevelUpError, Result};

const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%H:%M:%S%.f"];

/// Parse an event time of the form `HH:MM[:ss[.uuuuuu]]`
pub fn parse_event_time(value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            LevelUpError::InvalidInput(format!(
                "\"{}\" value has an invalid format. It must be in HH:MM[:ss[.uuuuuu]] format.",
                value
            ))
        })
}

/// Format an event time for output
pub fn format_event_time(time: &NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_time_formats() {
        let expected = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        assert_eq!(parse_event_time("19:00").unwrap(), expected);
        assert_eq!(parse_event_time("19:00:00").unwrap(), expected);
        assert_eq!(
            parse_event_time("07:30:15.250000").unwrap(),
            NaiveTime::from_hms_micro_opt(7, 30, 15, 250_000).unwrap()
        );
    }

    #[test]
    fn test_parse_event_time_rejects_garbage() {
        let err = parse_event_time("tonight").unwrap_err();
        assert!(err.to_string().contains("invalid format"));
        assert!(parse_event_time("25:00").is_err());
    }

    #[test]
    fn test_format_event_time() {
        let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_event_time(&time), "09:05:00");
    }
}
