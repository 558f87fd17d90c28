//! Shared utility functions for BAQ crates.

/// Date and timestamp utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Timestamp format used by the hourly pollution dataset: "YYYY-MM-DD HH:MM:SS"
    pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Plain date format used for CLI arguments and range boundaries: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Format a NaiveDateTime as "YYYY-MM-DD HH:MM:SS"
    pub fn format_datetime(datetime: &NaiveDateTime) -> String {
        datetime.format(DATETIME_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Parse a timestamp string in "YYYY-MM-DD HH:MM:SS" format
    pub fn parse_datetime(s: &str) -> anyhow::Result<NaiveDateTime> {
        Ok(NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)?)
    }

    /// Parse a timestamp that may be either a full "YYYY-MM-DD HH:MM:SS"
    /// timestamp or a bare "YYYY-MM-DD" date (taken as midnight).
    ///
    /// The two input datasets do not agree on a datetime representation, so
    /// both are normalized to `NaiveDateTime` before any range comparison.
    pub fn parse_timestamp_lenient(s: &str) -> anyhow::Result<NaiveDateTime> {
        let trimmed = s.trim();
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT) {
            return Ok(dt);
        }
        let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)?;
        Ok(date.and_hms_opt(0, 0, 0).unwrap())
    }

}
