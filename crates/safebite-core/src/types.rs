//! Wire types for the `SafeBite` backend REST API
//!
//! Every shape here mirrors a backend payload. Fields the backend may omit
//! carry `serde(default)` so a sparse response normalizes to zeros and empty
//! collections instead of failing deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sensor activity counters for the dashboard header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCounts {
    /// Readings received today
    #[serde(default)]
    pub today: u64,

    /// Readings received in the last 7 days
    #[serde(default)]
    pub last7d: u64,

    /// Readings received in the last 30 days
    #[serde(default)]
    pub last30d: u64,
}

impl ActivityCounts {
    /// Label for the "today" counter card
    #[must_use]
    pub fn today_label(&self) -> String {
        format!("Today: {}", self.today)
    }

    /// Label for the 7-day counter card
    #[must_use]
    pub fn last7d_label(&self) -> String {
        format!("Last 7d: {}", self.last7d)
    }

    /// Label for the 30-day counter card
    #[must_use]
    pub fn last30d_label(&self) -> String {
        format!("Last 30d: {}", self.last30d)
    }
}

/// Response wrapper for `GET /api/admin/sensor/activity-counts`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ActivityCountsResponse {
    /// The counters
    #[serde(default)]
    pub counts: ActivityCounts,
}

/// Granularity of the device-usage activity series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityGranularity {
    /// Twelve calendar months of the current year
    #[default]
    Monthly,
    /// One bucket per year
    Yearly,
}

impl ActivityGranularity {
    /// Wire value for the `filter` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for ActivityGranularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Usage buckets returned by the activity-data endpoint.
///
/// Exactly one of the two arrays is present depending on the requested
/// granularity; both absent normalizes to an empty series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityBuckets {
    /// Twelve per-month device-usage counts (monthly granularity)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<Vec<u64>>,

    /// Per-year device-usage counts, oldest first (yearly granularity)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<u64>>,
}

/// Response wrapper for `GET /api/admin/sensor/activity-data`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityDataResponse {
    /// The usage buckets
    #[serde(default)]
    pub data: ActivityBuckets,
}

/// Dashboard aggregate numbers from `GET /api/admin/statistics?type=dashboard-stats`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Devices registered in the fleet
    #[serde(default)]
    pub total_devices: u64,

    /// Devices that reported within the active window
    #[serde(default)]
    pub active_devices: u64,

    /// Open spoilage alerts
    #[serde(default)]
    pub spoilage_alerts: u64,

    /// Registered user accounts
    #[serde(default)]
    pub registered_users: u64,
}

/// A monitored sensor device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Backend identifier
    pub id: i64,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Hardware kind (e.g. "gas", "temperature", "combo")
    #[serde(default)]
    pub device_type: String,

    /// Lifecycle status (e.g. "active", "inactive", "maintenance")
    #[serde(default)]
    pub status: String,

    /// Physical location label
    #[serde(default)]
    pub location: String,

    /// Last heartbeat, if the device ever reported
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

/// Device create/update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevicePayload {
    /// Display name
    pub name: String,

    /// Hardware kind
    pub device_type: String,

    /// Lifecycle status
    pub status: String,

    /// Physical location label
    pub location: String,
}

/// Response wrapper for device listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevicesResponse {
    /// Device rows
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
}

/// A user-submitted feedback entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Backend identifier
    pub id: i64,

    /// Submitting user's display name
    #[serde(default)]
    pub user_name: String,

    /// Feedback body
    #[serde(default)]
    pub message: String,

    /// Category (e.g. "bug", "feature", "general")
    #[serde(default)]
    pub category: String,

    /// Triage status (e.g. "open", "resolved")
    #[serde(default)]
    pub status: String,

    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,

    /// Admin reply, if one has been posted
    #[serde(default)]
    pub reply: Option<String>,
}

/// Reply payload for `PUT /api/feedbacks/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReply {
    /// New triage status
    pub status: String,

    /// Reply body
    pub reply: String,
}

/// Response wrapper for feedback listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbacksResponse {
    /// Feedback rows
    #[serde(default)]
    pub feedbacks: Vec<FeedbackRecord>,
}

/// One row of the detailed spoilage report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpoilageReportRow {
    /// Backend identifier
    pub id: i64,

    /// Monitored food item
    #[serde(default)]
    pub food_item: String,

    /// Food category (e.g. "dairy", "meat", "produce")
    #[serde(default)]
    pub food_category: String,

    /// Assessed risk level (e.g. "safe", "at-risk", "spoiled")
    #[serde(default)]
    pub risk_level: String,

    /// Gas sensor reading (ppm)
    #[serde(default)]
    pub gas_level: f64,

    /// Temperature reading (Celsius)
    #[serde(default)]
    pub temperature: f64,

    /// Relative humidity reading (percent)
    #[serde(default)]
    pub humidity: f64,

    /// Reading timestamp
    pub recorded_at: DateTime<Utc>,
}

/// Pagination metadata attached to server-paginated responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Current page (1-based)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Total matching rows
    #[serde(default)]
    pub total: u64,

    /// Total pages
    #[serde(default = "default_page")]
    pub total_pages: u32,
}

const fn default_page() -> u32 {
    1
}

const fn default_per_page() -> u32 {
    10
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: default_per_page(),
            total: 0,
            total_pages: 1,
        }
    }
}

impl PaginationInfo {
    /// The "Showing X–Y of Z" summary label for a server-paginated table
    #[must_use]
    pub fn showing_label(&self) -> String {
        let start = if self.total == 0 {
            0
        } else {
            u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page) + 1
        };
        let end = (u64::from(self.page) * u64::from(self.per_page)).min(self.total);
        format!("Showing {start}\u{2013}{end} of {}", self.total)
    }
}

/// One page of the detailed spoilage report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportPage {
    /// Report rows for the requested page
    #[serde(default)]
    pub rows: Vec<SpoilageReportRow>,

    /// Server-side pagination metadata
    #[serde(default)]
    pub pagination: PaginationInfo,
}

/// Query parameters for the detailed spoilage report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Requested page (1-based)
    pub page: Option<u32>,

    /// Rows per page
    pub limit: Option<u32>,

    /// Inclusive start date (`YYYY-MM-DD`)
    pub start_date: Option<String>,

    /// Inclusive end date (`YYYY-MM-DD`)
    pub end_date: Option<String>,

    /// Food-category filter
    pub food_category: Option<String>,
}

impl ReportQuery {
    /// Render the query string (without leading `?`), empty if no
    /// parameter is set. Values are percent-encoded.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();

        if let Some(page) = self.page {
            params.push(format!("page={page}"));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        if let Some(ref start) = self.start_date {
            params.push(format!("start_date={}", urlencoding::encode(start)));
        }
        if let Some(ref end) = self.end_date {
            params.push(format!("end_date={}", urlencoding::encode(end)));
        }
        if let Some(ref category) = self.food_category {
            params.push(format!("food_category={}", urlencoding::encode(category)));
        }

        params.join("&")
    }
}

/// A spoilage prediction from the ML service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    /// Food category the prediction applies to
    #[serde(default)]
    pub food_category: String,

    /// Predicted status (e.g. "safe", "at-risk", "spoiled")
    #[serde(default)]
    pub predicted_status: String,

    /// Model confidence in the 0.0..=1.0 range
    #[serde(default)]
    pub confidence: f64,

    /// Prediction horizon in hours
    #[serde(default)]
    pub horizon_hours: u32,

    /// Model version identifier
    #[serde(default)]
    pub model_version: Option<String>,
}

/// Response wrapper for `GET /api/ml/predictions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MlPredictionsResponse {
    /// Prediction rows
    #[serde(default)]
    pub predictions: Vec<MlPrediction>,

    /// When the model last ran
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

/// A registered user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Backend identifier
    pub id: i64,

    /// Login name
    #[serde(default)]
    pub username: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Role (e.g. "admin", "user")
    #[serde(default)]
    pub role: String,

    /// Whether the account is enabled
    #[serde(default)]
    pub active: bool,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Response wrapper for user listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersResponse {
    /// User rows
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// One admin audit-log row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLogRow {
    /// Backend identifier
    pub id: i64,

    /// Acting admin's display name
    #[serde(default)]
    pub actor: String,

    /// Action name (e.g. "device.update")
    #[serde(default)]
    pub action: String,

    /// Free-form detail
    #[serde(default)]
    pub detail: String,

    /// Event timestamp
    pub logged_at: DateTime<Utc>,
}

/// Response wrapper for the admin audit log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminLogResponse {
    /// Log rows
    #[serde(default)]
    pub logs: Vec<AdminLogRow>,
}

/// One user activity-log row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivityRow {
    /// Backend identifier
    pub id: i64,

    /// User's display name
    #[serde(default)]
    pub username: String,

    /// Activity description (e.g. "viewed report")
    #[serde(default)]
    pub activity: String,

    /// Page the activity occurred on
    #[serde(default)]
    pub page: String,

    /// Event timestamp
    pub logged_at: DateTime<Utc>,
}

/// Response wrapper for the user activity log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserActivityResponse {
    /// Activity rows
    #[serde(default)]
    pub activities: Vec<UserActivityRow>,
}

/// Per-category reading count for the analytics summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Food category
    #[serde(default)]
    pub category: String,

    /// Reading count
    #[serde(default)]
    pub count: u64,
}

/// Aggregate sensor analytics from `GET /api/sensor-analytics/summary`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Mean gas reading (ppm)
    #[serde(default)]
    pub avg_gas: f64,

    /// Mean temperature (Celsius)
    #[serde(default)]
    pub avg_temperature: f64,

    /// Mean relative humidity (percent)
    #[serde(default)]
    pub avg_humidity: f64,

    /// Readings received today
    #[serde(default)]
    pub readings_today: u64,

    /// Share of readings flagged as spoilage, 0.0..=1.0
    #[serde(default)]
    pub spoilage_rate: f64,

    /// Reading counts per food category
    #[serde(default)]
    pub by_category: Vec<CategoryCount>,
}

/// One per-record sensor reading for the analytics detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReadingRow {
    /// Backend identifier
    pub id: i64,

    /// Reporting device name
    #[serde(default)]
    pub device_name: String,

    /// Food category under the sensor
    #[serde(default)]
    pub food_category: String,

    /// Gas sensor reading (ppm)
    #[serde(default)]
    pub gas_level: f64,

    /// Temperature reading (Celsius)
    #[serde(default)]
    pub temperature: f64,

    /// Relative humidity reading (percent)
    #[serde(default)]
    pub humidity: f64,

    /// Reading timestamp
    pub recorded_at: DateTime<Utc>,
}

/// Response wrapper for the analytics detail view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorReadingsResponse {
    /// Reading rows
    #[serde(default)]
    pub readings: Vec<SensorReadingRow>,
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_activity_count_labels() {
        let counts = ActivityCounts {
            today: 5,
            last7d: 12,
            last30d: 40,
        };

        assert_eq!(counts.today_label(), "Today: 5");
        assert_eq!(counts.last7d_label(), "Last 7d: 12");
        assert_eq!(counts.last30d_label(), "Last 30d: 40");
    }

    #[test]
    fn test_activity_counts_wire_shape() {
        let json = r#"{"counts":{"today":5,"last7d":12,"last30d":40}}"#;
        let parsed: ActivityCountsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.counts.today, 5);
        assert_eq!(parsed.counts.last7d, 12);
        assert_eq!(parsed.counts.last30d, 40);
    }

    #[test]
    fn test_activity_counts_sparse_payload_defaults_to_zero() {
        let json = r#"{"counts":{"today":3}}"#;
        let parsed: ActivityCountsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.counts.today, 3);
        assert_eq!(parsed.counts.last7d, 0);
        assert_eq!(parsed.counts.last30d, 0);
    }

    #[test]
    fn test_activity_data_monthly_shape() {
        let json = r#"{"data":{"months":[1,2,3,4,5,6,7,8,9,10,11,12]}}"#;
        let parsed: ActivityDataResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.data.months.as_deref(), Some(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12][..]));
        assert!(parsed.data.years.is_none());
    }

    #[test]
    fn test_activity_data_yearly_shape() {
        let json = r#"{"data":{"years":[14,22,31]}}"#;
        let parsed: ActivityDataResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.data.years.as_deref(), Some(&[14, 22, 31][..]));
        assert!(parsed.data.months.is_none());
    }

    #[test]
    fn test_device_record_tolerates_missing_fields() {
        let json = r#"{"id":7}"#;
        let device: DeviceRecord = serde_json::from_str(json).unwrap();

        assert_eq!(device.id, 7);
        assert_eq!(device.name, "");
        assert_eq!(device.status, "");
        assert!(device.last_seen.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"counts":{"today":1},"extra_debug_field":{"nested":true}}"#;
        let parsed: ActivityCountsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.counts.today, 1);
    }

    #[test]
    fn test_report_query_string_empty() {
        assert_eq!(ReportQuery::default().query_string(), "");
    }

    #[test]
    fn test_report_query_string_full() {
        let query = ReportQuery {
            page: Some(2),
            limit: Some(25),
            start_date: Some("2025-01-01".to_string()),
            end_date: Some("2025-01-31".to_string()),
            food_category: Some("dairy & eggs".to_string()),
        };

        assert_eq!(
            query.query_string(),
            "page=2&limit=25&start_date=2025-01-01&end_date=2025-01-31&food_category=dairy%20%26%20eggs"
        );
    }

    #[test]
    fn test_granularity_wire_values() {
        assert_eq!(ActivityGranularity::Monthly.as_str(), "monthly");
        assert_eq!(ActivityGranularity::Yearly.to_string(), "yearly");
        assert_eq!(
            serde_json::to_string(&ActivityGranularity::Yearly).unwrap(),
            "\"yearly\""
        );
    }

    #[test]
    fn test_pagination_showing_label() {
        let info = PaginationInfo {
            page: 2,
            per_page: 25,
            total: 103,
            total_pages: 5,
        };
        assert_eq!(info.showing_label(), "Showing 26\u{2013}50 of 103");

        let empty = PaginationInfo::default();
        assert_eq!(empty.showing_label(), "Showing 0\u{2013}0 of 0");
    }

    #[test]
    fn test_empty_list_responses_default() {
        let devices: DevicesResponse = serde_json::from_str("{}").unwrap();
        let feedbacks: FeedbacksResponse = serde_json::from_str("{}").unwrap();
        let report: ReportPage = serde_json::from_str("{}").unwrap();

        assert!(devices.devices.is_empty());
        assert!(feedbacks.feedbacks.is_empty());
        assert!(report.rows.is_empty());
        assert_eq!(report.pagination.page, 1);
        assert_eq!(report.pagination.total_pages, 1);
    }
}
