//! Small formatting and date helpers shared across the dashboard

use chrono::{DateTime, NaiveDate, Utc};

/// Format a timestamp's date portion as `YYYY-MM-DD`
#[must_use]
pub fn ymd(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` string, `None` if malformed
#[must_use]
pub fn parse_ymd(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format a timestamp for table cells
#[must_use]
pub fn table_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Abbreviated month labels for the monthly usage chart
#[must_use]
pub const fn month_labels() -> [&'static str; 12] {
    [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
}

/// Render a 0.0..=1.0 ratio as a whole percent, clamped
#[must_use]
pub fn format_percent(ratio: f64) -> String {
    let clamped = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("{:.0}%", clamped * 100.0)
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ymd_formatting() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 5, 23, 59, 59).unwrap();
        assert_eq!(ymd(ts), "2025-08-05");
    }

    #[test]
    fn test_parse_ymd() {
        assert_eq!(
            parse_ymd("2025-08-05"),
            NaiveDate::from_ymd_opt(2025, 8, 5)
        );
        assert_eq!(parse_ymd(" 2025-01-31 "), NaiveDate::from_ymd_opt(2025, 1, 31));
        assert_eq!(parse_ymd("08/05/2025"), None);
        assert_eq!(parse_ymd(""), None);
    }

    #[test]
    fn test_table_timestamp() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 5, 9, 5, 0).unwrap();
        assert_eq!(table_timestamp(ts), "2025-08-05 09:05:00");
    }

    #[test]
    fn test_month_labels_count() {
        assert_eq!(month_labels().len(), 12);
        assert_eq!(month_labels()[0], "Jan");
        assert_eq!(month_labels()[11], "Dec");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.93), "93%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.7), "100%");
        assert_eq!(format_percent(f64::NAN), "0%");
    }
}
