//! Client-side table filtering and pagination
//!
//! Pages fetch a full result set once, cache it, and re-render slices of it
//! as the user types and clicks. Everything here is pure: the caller passes
//! `today` explicitly, so no ambient clock is read inside the engine.

use crate::types::{
    AdminLogRow, DeviceRecord, FeedbackRecord, MlPrediction, SensorReadingRow, SpoilageReportRow,
    UserActivityRow, UserRecord,
};
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

/// Date window a record's timestamp must fall into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateRange {
    /// No date constraint
    #[default]
    All,
    /// Today's calendar date only
    Daily,
    /// The ISO week (Monday start) containing the anchor, or today if unset
    Weekly {
        /// Any date inside the wanted week
        anchor: Option<NaiveDate>,
    },
    /// The calendar month containing the anchor, or today's month if unset
    Monthly {
        /// Wanted (year, month)
        anchor: Option<(i32, u32)>,
    },
    /// The calendar year of the anchor, or today's year if unset
    Yearly {
        /// Wanted year
        anchor: Option<i32>,
    },
    /// An explicit inclusive date pair
    Custom {
        /// First included date
        start: NaiveDate,
        /// Last included date
        end: NaiveDate,
    },
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some((start, end))
}

fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

impl DateRange {
    /// Inclusive date window, `None` when unconstrained.
    ///
    /// An out-of-range anchor (e.g. month 13 from a hand-edited control)
    /// falls back to the period containing `today`.
    #[must_use]
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::All => None,
            Self::Daily => Some((today, today)),
            Self::Weekly { anchor } => {
                let week = anchor.unwrap_or(today).week(Weekday::Mon);
                Some((week.first_day(), week.last_day()))
            }
            Self::Monthly { anchor } => {
                let (year, month) = anchor.unwrap_or((today.year(), today.month()));
                month_bounds(year, month)
                    .or_else(|| month_bounds(today.year(), today.month()))
            }
            Self::Yearly { anchor } => {
                let year = anchor.unwrap_or_else(|| today.year());
                year_bounds(year).or_else(|| year_bounds(today.year()))
            }
            Self::Custom { start, end } => Some((*start, *end)),
        }
    }

    /// Whether a timestamp falls inside the window
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>, today: NaiveDate) -> bool {
        match self.bounds(today) {
            None => true,
            Some((start, end)) => {
                let date = timestamp.date_naive();
                start <= date && date <= end
            }
        }
    }
}

/// Filter and pagination criteria for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive free-text needle; empty matches everything
    pub search: String,
    /// Exact-match status filter; `None` means all
    pub status: Option<String>,
    /// Exact-match category filter; `None` means all
    pub category: Option<String>,
    /// Date window
    pub range: DateRange,
    /// Requested page (1-based; clamped on apply)
    pub page: u32,
    /// Rows per page
    pub page_size: u32,
}

impl FilterCriteria {
    /// Fresh criteria on page 1 with the given page size
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            search: String::new(),
            status: None,
            category: None,
            range: DateRange::All,
            page: 1,
            page_size,
        }
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(10)
    }
}

/// A record the filter engine can interrogate
pub trait Filterable {
    /// Fields the free-text search runs over
    fn search_fields(&self) -> Vec<&str>;

    /// Value matched by the status filter, if the record has one
    fn status(&self) -> Option<&str> {
        None
    }

    /// Value matched by the category filter, if the record has one
    fn category(&self) -> Option<&str> {
        None
    }

    /// Timestamp tested against the date window, if the record has one
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// One rendered page of a filtered result set
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredPage<T> {
    /// The visible slice
    pub rows: Vec<T>,
    /// Unclamped total filtered count
    pub total: usize,
    /// Total page count, at least 1
    pub total_pages: u32,
    /// The page actually shown (requested page, clamped)
    pub page: u32,
    /// Rows per page used for the slice
    pub per_page: u32,
}

impl<T> FilteredPage<T> {
    /// Whether the filtered set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// 1-based page numbers for the pagination button row
    #[must_use]
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.total_pages
    }

    /// The "Showing X–Y of Z" summary label
    #[must_use]
    pub fn showing_label(&self) -> String {
        let start = if self.total == 0 {
            0
        } else {
            (self.page - 1) as usize * self.per_page as usize + 1
        };
        let end = (self.page as usize * self.per_page as usize).min(self.total);
        format!("Showing {start}\u{2013}{end} of {}", self.total)
    }
}

fn matches_select(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(value) => actual == Some(value),
    }
}

/// Filter a cached result set and slice out the requested page.
///
/// Predicates are conjunctive: search AND status AND category AND date
/// window. Records without a timestamp are excluded while a bounded date
/// window is active. Out-of-range page numbers clamp to the last page.
pub fn apply<T>(records: &[T], criteria: &FilterCriteria, today: NaiveDate) -> FilteredPage<T>
where
    T: Filterable + Clone,
{
    let needle = criteria.search.trim().to_lowercase();
    let bounded = criteria.range.bounds(today).is_some();

    let filtered: Vec<&T> = records
        .iter()
        .filter(|record| {
            let search_ok = needle.is_empty()
                || record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle));

            let status_ok = matches_select(criteria.status.as_deref(), record.status());
            let category_ok = matches_select(criteria.category.as_deref(), record.category());

            let date_ok = match record.timestamp() {
                Some(ts) => criteria.range.contains(ts, today),
                None => !bounded,
            };

            search_ok && status_ok && category_ok && date_ok
        })
        .collect();

    let total = filtered.len();
    let per_page = criteria.page_size.max(1);
    let total_pages = (total.div_ceil(per_page as usize)).max(1) as u32;
    let page = criteria.page.clamp(1, total_pages);

    let start = (page - 1) as usize * per_page as usize;
    let rows = filtered
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    FilteredPage {
        rows,
        total,
        total_pages,
        page,
        per_page,
    }
}

impl Filterable for DeviceRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.device_type, &self.location]
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.device_type)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.last_seen
    }
}

impl Filterable for FeedbackRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.user_name, &self.message]
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.submitted_at)
    }
}

impl Filterable for UserRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.username, &self.email]
    }

    fn status(&self) -> Option<&str> {
        Some(if self.active { "active" } else { "inactive" })
    }

    fn category(&self) -> Option<&str> {
        Some(&self.role)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

impl Filterable for SpoilageReportRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.food_item, &self.food_category]
    }

    fn status(&self) -> Option<&str> {
        Some(&self.risk_level)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.food_category)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.recorded_at)
    }
}

impl Filterable for MlPrediction {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.food_category, &self.predicted_status]
    }

    fn status(&self) -> Option<&str> {
        Some(&self.predicted_status)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.food_category)
    }
}

impl Filterable for AdminLogRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.actor, &self.action, &self.detail]
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.logged_at)
    }
}

impl Filterable for UserActivityRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.username, &self.activity, &self.page]
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.logged_at)
    }
}

impl Filterable for SensorReadingRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.device_name, &self.food_category]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.food_category)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.recorded_at)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        label: String,
        kind: String,
        state: String,
        at: Option<DateTime<Utc>>,
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.label, &self.kind]
        }

        fn status(&self) -> Option<&str> {
            Some(&self.state)
        }

        fn category(&self) -> Option<&str> {
            Some(&self.kind)
        }

        fn timestamp(&self) -> Option<DateTime<Utc>> {
            self.at
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 30, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(label: &str, kind: &str, state: &str, ts: Option<DateTime<Utc>>) -> Row {
        Row {
            label: label.to_string(),
            kind: kind.to_string(),
            state: state.to_string(),
            at: ts,
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("Fridge A", "gas", "active", Some(at(2025, 8, 5))),
            row("Fridge B", "temperature", "inactive", Some(at(2025, 8, 4))),
            row("Pantry Shelf", "gas", "active", Some(at(2025, 7, 20))),
            row("Cold Room", "combo", "maintenance", Some(at(2024, 12, 31))),
        ]
    }

    #[test]
    fn test_identity_when_unfiltered() {
        let records = sample();
        let mut criteria = FilterCriteria::new(100);
        criteria.page = 1;

        let page = apply(&records, &criteria, day(2025, 8, 5));

        assert_eq!(page.rows, records);
        assert_eq!(page.total, records.len());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let records = sample();
        let mut criteria = FilterCriteria::new(100);
        criteria.search = "FRIDGE".to_string();

        let page = apply(&records, &criteria, day(2025, 8, 5));
        assert_eq!(page.total, 2);

        criteria.search = "temper".to_string();
        let page = apply(&records, &criteria, day(2025, 8, 5));
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].label, "Fridge B");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let records = sample();
        let mut criteria = FilterCriteria::new(100);
        criteria.search = "fridge".to_string();
        criteria.status = Some("active".to_string());
        criteria.category = Some("gas".to_string());

        let page = apply(&records, &criteria, day(2025, 8, 5));

        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].label, "Fridge A");
    }

    #[test]
    fn test_status_filter_is_exact() {
        let records = sample();
        let mut criteria = FilterCriteria::new(100);
        criteria.status = Some("act".to_string());

        let page = apply(&records, &criteria, day(2025, 8, 5));
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_daily_range_keeps_only_today() {
        let records = sample();
        let mut criteria = FilterCriteria::new(100);
        criteria.range = DateRange::Daily;

        let today = day(2025, 8, 5);
        let page = apply(&records, &criteria, today);

        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].at.unwrap().date_naive(), today);
    }

    #[test]
    fn test_weekly_range_is_monday_based() {
        // 2025-08-05 is a Tuesday; its ISO week runs 08-04..08-10.
        let bounds = DateRange::Weekly { anchor: None }
            .bounds(day(2025, 8, 5))
            .unwrap();

        assert_eq!(bounds, (day(2025, 8, 4), day(2025, 8, 10)));
    }

    #[test]
    fn test_weekly_anchor_overrides_today() {
        let bounds = DateRange::Weekly {
            anchor: Some(day(2025, 7, 16)),
        }
        .bounds(day(2025, 8, 5))
        .unwrap();

        assert_eq!(bounds, (day(2025, 7, 14), day(2025, 7, 20)));
    }

    #[test]
    fn test_monthly_range_with_and_without_anchor() {
        let today = day(2025, 8, 5);

        let implicit = DateRange::Monthly { anchor: None }.bounds(today).unwrap();
        assert_eq!(implicit, (day(2025, 8, 1), day(2025, 8, 31)));

        let explicit = DateRange::Monthly {
            anchor: Some((2024, 2)),
        }
        .bounds(today)
        .unwrap();
        assert_eq!(explicit, (day(2024, 2, 1), day(2024, 2, 29)));
    }

    #[test]
    fn test_monthly_invalid_anchor_falls_back_to_today() {
        let today = day(2025, 8, 5);
        let bounds = DateRange::Monthly {
            anchor: Some((2025, 13)),
        }
        .bounds(today)
        .unwrap();

        assert_eq!(bounds, (day(2025, 8, 1), day(2025, 8, 31)));
    }

    #[test]
    fn test_yearly_and_custom_ranges() {
        let records = sample();
        let today = day(2025, 8, 5);

        let mut criteria = FilterCriteria::new(100);
        criteria.range = DateRange::Yearly { anchor: Some(2024) };
        assert_eq!(apply(&records, &criteria, today).total, 1);

        criteria.range = DateRange::Custom {
            start: day(2025, 7, 1),
            end: day(2025, 8, 4),
        };
        let page = apply(&records, &criteria, today);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_records_without_timestamp_excluded_under_bounded_range() {
        let records = vec![row("No clock", "gas", "active", None)];
        let mut criteria = FilterCriteria::new(100);

        criteria.range = DateRange::All;
        assert_eq!(apply(&records, &criteria, day(2025, 8, 5)).total, 1);

        criteria.range = DateRange::Daily;
        assert_eq!(apply(&records, &criteria, day(2025, 8, 5)).total, 0);
    }

    #[test]
    fn test_total_pages_is_ceil_of_count_over_size() {
        let records: Vec<Row> = (0..95)
            .map(|i| row(&format!("Device {i}"), "gas", "active", Some(at(2025, 8, 1))))
            .collect();
        let mut criteria = FilterCriteria::new(10);
        criteria.page = 1;

        let page = apply(&records, &criteria, day(2025, 8, 5));

        assert_eq!(page.total, 95);
        assert_eq!(page.total_pages, 10);
        assert_eq!(page.page_numbers().count(), 10);
        assert_eq!(page.rows.len(), 10);
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let records: Vec<Row> = (0..25)
            .map(|i| row(&format!("Device {i}"), "gas", "active", Some(at(2025, 8, 1))))
            .collect();
        let mut criteria = FilterCriteria::new(10);
        criteria.page = 99;

        let page = apply(&records, &criteria, day(2025, 8, 5));

        assert_eq!(page.page, 3);
        assert_eq!(page.rows.len(), 5);
    }

    #[test]
    fn test_page_zero_clamps_to_first() {
        let records = sample();
        let mut criteria = FilterCriteria::new(2);
        criteria.page = 0;

        let page = apply(&records, &criteria, day(2025, 8, 5));
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 2);
    }

    #[test]
    fn test_empty_result_keeps_one_page() {
        let records = sample();
        let mut criteria = FilterCriteria::new(10);
        criteria.search = "does-not-exist".to_string();

        let page = apply(&records, &criteria, day(2025, 8, 5));

        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.showing_label(), "Showing 0\u{2013}0 of 0");
    }

    #[test]
    fn test_showing_label_for_middle_page() {
        let records: Vec<Row> = (0..103)
            .map(|i| row(&format!("Device {i}"), "gas", "active", Some(at(2025, 8, 1))))
            .collect();
        let mut criteria = FilterCriteria::new(25);
        criteria.page = 2;

        let page = apply(&records, &criteria, day(2025, 8, 5));
        assert_eq!(page.showing_label(), "Showing 26\u{2013}50 of 103");

        criteria.page = 5;
        let page = apply(&records, &criteria, day(2025, 8, 5));
        assert_eq!(page.showing_label(), "Showing 101\u{2013}103 of 103");
    }

    #[test]
    fn test_page_size_zero_is_guarded() {
        let records = sample();
        let mut criteria = FilterCriteria::new(0);
        criteria.page = 1;

        let page = apply(&records, &criteria, day(2025, 8, 5));
        assert_eq!(page.per_page, 1);
        assert_eq!(page.rows.len(), 1);
    }

    #[test]
    fn test_device_record_filterable_impl() {
        let device = DeviceRecord {
            id: 1,
            name: "Fridge Alpha".to_string(),
            device_type: "gas".to_string(),
            status: "active".to_string(),
            location: "Kitchen".to_string(),
            last_seen: Some(at(2025, 8, 5)),
        };

        let mut criteria = FilterCriteria::new(10);
        criteria.search = "kitchen".to_string();
        let page = apply(&[device], &criteria, day(2025, 8, 5));
        assert_eq!(page.total, 1);
    }
}
