//! Page components, one per routed page
//!
//! Every page follows the same lifecycle: signals created on mount hold the
//! fetched rows and filter criteria, a load action runs once when the page
//! is entered, and completions write through `try_set` so a response that
//! lands after navigating away mutates nothing.

pub mod analytics;
pub mod dashboard;
pub mod devices;
pub mod feedbacks;
pub mod logs;
pub mod not_found;
pub mod predictions;
pub mod reports;
pub mod users;

pub use analytics::{AnalyticsDetail, AnalyticsSummaryPage};
pub use dashboard::Dashboard;
pub use devices::DeviceManagement;
pub use feedbacks::Feedbacks;
pub use logs::{AdminLog, UserActivityLog};
pub use not_found::NotFound;
pub use predictions::MlPredictions;
pub use reports::ReportGenerator;
pub use users::Users;

use chrono::{Datelike, NaiveDate, Utc};
use safebite_core::filter::DateRange;
use safebite_core::utils::parse_ymd;

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub(crate) fn current_year() -> i32 {
    Utc::now().year()
}

/// Resolve the date-range control values into a `DateRange`.
///
/// Unset period anchors mean "the period containing today". A custom range
/// with missing or reversed dates degrades to no constraint.
pub(crate) fn resolve_range(kind: &str, start: &str, end: &str) -> DateRange {
    match kind {
        "daily" => DateRange::Daily,
        "weekly" => DateRange::Weekly { anchor: None },
        "monthly" => DateRange::Monthly { anchor: None },
        "yearly" => DateRange::Yearly { anchor: None },
        "custom" => match (parse_ymd(start), parse_ymd(end)) {
            (Some(start), Some(end)) if start <= end => DateRange::Custom { start, end },
            _ => DateRange::All,
        },
        _ => DateRange::All,
    }
}

/// Normalize a select control's value: empty or "all" means no filter
pub(crate) fn select_value(value: String) -> Option<String> {
    if value.is_empty() || value == "all" {
        None
    } else {
        Some(value)
    }
}

/// Normalize a text control's value: empty means unset
pub(crate) fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_range_periods() {
        assert_eq!(resolve_range("all", "", ""), DateRange::All);
        assert_eq!(resolve_range("daily", "", ""), DateRange::Daily);
        assert_eq!(
            resolve_range("weekly", "", ""),
            DateRange::Weekly { anchor: None }
        );
        assert_eq!(
            resolve_range("monthly", "", ""),
            DateRange::Monthly { anchor: None }
        );
        assert_eq!(
            resolve_range("yearly", "", ""),
            DateRange::Yearly { anchor: None }
        );
    }

    #[test]
    fn test_resolve_range_custom() {
        let range = resolve_range("custom", "2025-01-01", "2025-01-31");
        assert_eq!(
            range,
            DateRange::Custom {
                start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            }
        );
    }

    #[test]
    fn test_resolve_range_custom_degrades_on_bad_input() {
        assert_eq!(resolve_range("custom", "", "2025-01-31"), DateRange::All);
        assert_eq!(resolve_range("custom", "nonsense", "2025-01-31"), DateRange::All);
        // Reversed pair
        assert_eq!(
            resolve_range("custom", "2025-02-01", "2025-01-01"),
            DateRange::All
        );
    }

    #[test]
    fn test_resolve_range_unknown_kind() {
        assert_eq!(resolve_range("fortnightly", "", ""), DateRange::All);
    }

    #[test]
    fn test_select_value_normalization() {
        assert_eq!(select_value(String::new()), None);
        assert_eq!(select_value("all".to_string()), None);
        assert_eq!(select_value("active".to_string()), Some("active".to_string()));
    }

    #[test]
    fn test_non_empty_normalization() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(
            non_empty(" 2025-01-01 ".to_string()),
            Some("2025-01-01".to_string())
        );
    }
}
