//! Shared utility functions for the air quality prediction crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{Datelike, NaiveDate};

    /// Wire format for composite dates: "YYYY-MM-DD"
    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, ISO_FORMAT)?)
    }

    /// Build a calendar date from its parts, rejecting days that do not exist
    /// (Feb 30, Apr 31, ...).
    pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DateError(format!("{year}-{month:02}-{day:02} is not a calendar day")))
    }

    /// Number of days in the given month, or None for an invalid month.
    pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(next.signed_duration_since(first).num_days() as u32)
    }

    /// Split a date into (year, month, day).
    pub fn date_parts(date: &NaiveDate) -> (i32, u32, u32) {
        (date.year(), date.month(), date.day())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_pads_month_and_day() {
            assert_eq!(format_date(&calendar_date(2024, 5, 3).unwrap()), "2024-05-03");
            assert_eq!(format_date(&calendar_date(2025, 12, 31).unwrap()), "2025-12-31");
        }

        #[test]
        fn test_calendar_date_rejects_impossible_days() {
            assert!(calendar_date(2023, 2, 29).is_err());
            assert!(calendar_date(2024, 2, 29).is_ok());
            assert!(calendar_date(2024, 4, 31).is_err());
            assert_eq!(
                calendar_date(2024, 13, 1).unwrap_err().to_string(),
                "2024-13-01 is not a calendar day"
            );
        }

        #[test]
        fn test_days_in_month() {
            assert_eq!(days_in_month(2024, 2), Some(29));
            assert_eq!(days_in_month(2023, 2), Some(28));
            assert_eq!(days_in_month(2023, 12), Some(31));
            assert_eq!(days_in_month(2023, 0), None);
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
            assert_eq!(date_parts(&parsed), (2023, 6, 15));
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl std::error::Error for DateError {}
}
