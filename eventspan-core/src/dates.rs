//! Date string forms shared by form controls and summary text.

use chrono::{Datelike, NaiveDate};

/// Format a NaiveDate as "YYYY-MM-DD", the value form of native date inputs
pub fn format_ymd(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_ymd(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

/// Format a date for display, e.g. "June 10th, 2025"
pub fn format_long(date: &NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

/// English ordinal suffix for a day of month.
/// The teens all take "th" (11th, 12th, 13th).
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_and_parse_ymd() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let formatted = format_ymd(&date);
        assert_eq!(formatted, "2025-06-05");
        let parsed = parse_ymd(&formatted).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_parse_ymd_rejects_garbage() {
        assert!(parse_ymd("").is_err());
        assert!(parse_ymd("06/10/2025").is_err());
        assert!(parse_ymd("2025-13-01").is_err());
    }

    #[test]
    fn test_format_long() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert_eq!(format_long(&date), "June 10th, 2025");

        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_long(&date), "January 1st, 2025");

        let date = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
        assert_eq!(format_long(&date), "December 22nd, 2025");

        let date = NaiveDate::from_ymd_opt(2025, 8, 3).unwrap();
        assert_eq!(format_long(&date), "August 3rd, 2025");
    }

    #[test]
    fn test_ordinal_suffix_teens() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(31), "st");
    }
}
