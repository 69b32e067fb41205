//! Date and time helpers
//!
//! Input accepts `YYYY-MM-DD` dates and `HH:MM` times; responses render
//! dates as `DD-MM-YYYY` and times as `HH:MM`. Absent values stay absent.

use chrono::{NaiveDate, NaiveTime};

use crate::constants::formats;

/// Parse an input date (`YYYY-MM-DD`)
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), formats::INPUT_DATE).ok()
}

/// Parse an input time (`HH:MM`, seconds tolerated)
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, formats::TIME)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Render a stored date for display
pub fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(formats::DISPLAY_DATE).to_string())
}

/// Render a stored time for display
pub fn format_time(time: Option<NaiveTime>) -> Option<String> {
    time.map(|t| t.format(formats::TIME).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 11);
        assert_eq!(format_date(date), Some("11-05-2024".to_string()));
        assert_eq!(format_date(None), None);
    }

    #[test]
    fn test_format_time() {
        let time = NaiveTime::from_hms_opt(21, 5, 30);
        assert_eq!(format_time(time), Some("21:05".to_string()));
        assert_eq!(format_time(None), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-05-11"), NaiveDate::from_ymd_opt(2024, 5, 11));
        assert!(parse_date("11-05-2024").is_none());
        assert!(parse_date("not a date").is_none());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("21:00"), NaiveTime::from_hms_opt(21, 0, 0));
        assert_eq!(parse_time("21:00:15"), NaiveTime::from_hms_opt(21, 0, 15));
        assert!(parse_time("25:00").is_none());
    }
}
