//! Fetch helpers for the `SafeBite` backend REST API
//!
//! One async helper per endpoint family, all returning normalized shapes
//! from `safebite-core`. Every authenticated call carries a bearer token
//! read from browser local storage; a missing token fails before any
//! request goes out.

use gloo_net::http::{Request, RequestBuilder, Response};
use safebite_core::types::{
    ActivityBuckets, ActivityCounts, ActivityCountsResponse, ActivityDataResponse,
    ActivityGranularity, AdminLogResponse, AdminLogRow, AnalyticsSummary, DashboardStats,
    DevicePayload, DeviceRecord, DevicesResponse, FeedbackRecord, FeedbackReply,
    FeedbacksResponse, MlPredictionsResponse, ReportPage, ReportQuery, SensorReadingRow,
    SensorReadingsResponse, UserActivityResponse, UserActivityRow, UserRecord, UsersResponse,
};
use safebite_core::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Legacy local-storage keys the session token may live under, probed in
/// order; first hit wins. The naming drift is historical and carried
/// everywhere the token is read.
pub const TOKEN_KEYS: [&str; 3] = ["jwt_token", "sessionToken", "session_token"];

fn auth_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    TOKEN_KEYS.iter().find_map(|key| {
        storage
            .get_item(key)
            .ok()
            .flatten()
            .filter(|value| !value.is_empty())
    })
}

fn bearer() -> Result<String> {
    auth_token()
        .map(|token| format!("Bearer {token}"))
        .ok_or_else(|| Error::Authentication("no session token in local storage".to_string()))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        return Err(Error::Http {
            status: response.status(),
            message: response.status_text(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| Error::Other(format!("failed to parse response: {e}")))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = Request::get(url)
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| Error::Other(format!("request to {url} failed: {e}")))?;

    read_json(response).await
}

async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let request = builder
        .json(body)
        .map_err(|e| Error::Other(format!("failed to encode request body: {e}")))?;

    let response = request
        .send()
        .await
        .map_err(|e| Error::Other(format!("request failed: {e}")))?;

    read_json(response).await
}

/// URL of the activity-data endpoint for a granularity
#[must_use]
pub fn activity_data_url(granularity: ActivityGranularity) -> String {
    format!(
        "/api/admin/sensor/activity-data?filter={}",
        granularity.as_str()
    )
}

/// URL of a report endpoint with its query string attached
#[must_use]
pub fn report_url(endpoint: &str, query: &ReportQuery) -> String {
    let params = query.query_string();
    if params.is_empty() {
        endpoint.to_string()
    } else {
        format!("{endpoint}?{params}")
    }
}

/// Device-usage buckets for the dashboard chart
pub async fn fetch_activity_data(granularity: ActivityGranularity) -> Result<ActivityBuckets> {
    let response: ActivityDataResponse = get_json(&activity_data_url(granularity)).await?;
    Ok(response.data)
}

/// Activity counters for the dashboard header
pub async fn fetch_activity_counts() -> Result<ActivityCounts> {
    let response: ActivityCountsResponse =
        get_json("/api/admin/sensor/activity-counts").await?;
    Ok(response.counts)
}

/// Dashboard aggregate numbers
pub async fn fetch_dashboard_stats() -> Result<DashboardStats> {
    get_json("/api/admin/statistics?type=dashboard-stats").await
}

/// Registered user accounts
pub async fn fetch_users() -> Result<Vec<UserRecord>> {
    let response: UsersResponse = get_json("/api/admin/users").await?;
    Ok(response.users)
}

/// All feedback entries
pub async fn fetch_feedbacks() -> Result<Vec<FeedbackRecord>> {
    let response: FeedbacksResponse = get_json("/api/feedbacks").await?;
    Ok(response.feedbacks)
}

/// Post a reply to a feedback entry, returning the updated record
pub async fn reply_to_feedback(id: i64, reply: &FeedbackReply) -> Result<FeedbackRecord> {
    let builder =
        Request::put(&format!("/api/feedbacks/{id}")).header("Authorization", &bearer()?);
    send_json(builder, reply).await
}

/// The monitored device fleet
pub async fn fetch_devices() -> Result<Vec<DeviceRecord>> {
    let response: DevicesResponse = get_json("/api/device-management/devices").await?;
    Ok(response.devices)
}

/// Register a new device
pub async fn create_device(payload: &DevicePayload) -> Result<DeviceRecord> {
    let builder =
        Request::post("/api/device-management/devices").header("Authorization", &bearer()?);
    send_json(builder, payload).await
}

/// Update an existing device
pub async fn update_device(id: i64, payload: &DevicePayload) -> Result<DeviceRecord> {
    let builder = Request::put(&format!("/api/device-management/devices/{id}"))
        .header("Authorization", &bearer()?);
    send_json(builder, payload).await
}

/// Remove a device from the fleet
pub async fn delete_device(id: i64) -> Result<()> {
    let response = Request::delete(&format!("/api/device-management/devices/{id}"))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| Error::Other(format!("request failed: {e}")))?;

    if response.ok() {
        Ok(())
    } else {
        Err(Error::Http {
            status: response.status(),
            message: response.status_text(),
        })
    }
}

/// One server-paginated page of the detailed spoilage report
pub async fn fetch_report(endpoint: &str, query: &ReportQuery) -> Result<ReportPage> {
    get_json(&report_url(endpoint, query)).await
}

/// Aggregate sensor analytics
pub async fn fetch_analytics_summary() -> Result<AnalyticsSummary> {
    get_json("/api/sensor-analytics/summary").await
}

/// Per-record sensor readings for the analytics detail view
pub async fn fetch_sensor_readings() -> Result<Vec<SensorReadingRow>> {
    let response: SensorReadingsResponse = get_json("/api/sensor-analytics/readings").await?;
    Ok(response.readings)
}

/// Current ML spoilage predictions
pub async fn fetch_predictions() -> Result<MlPredictionsResponse> {
    get_json("/api/ml/predictions").await
}

/// Admin audit log
pub async fn fetch_admin_log() -> Result<Vec<AdminLogRow>> {
    let response: AdminLogResponse = get_json("/api/admin/logs").await?;
    Ok(response.logs)
}

/// User activity log
pub async fn fetch_user_activity() -> Result<Vec<UserActivityRow>> {
    let response: UserActivityResponse = get_json("/api/admin/user-activity").await?;
    Ok(response.activities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_keys_probe_order() {
        assert_eq!(TOKEN_KEYS, ["jwt_token", "sessionToken", "session_token"]);
    }

    #[test]
    fn test_activity_data_url() {
        assert_eq!(
            activity_data_url(ActivityGranularity::Monthly),
            "/api/admin/sensor/activity-data?filter=monthly"
        );
        assert_eq!(
            activity_data_url(ActivityGranularity::Yearly),
            "/api/admin/sensor/activity-data?filter=yearly"
        );
    }

    #[test]
    fn test_report_url_with_and_without_query() {
        let endpoint = "/api/users/detailed-spoilage-report";

        assert_eq!(report_url(endpoint, &ReportQuery::default()), endpoint);

        let query = ReportQuery {
            page: Some(3),
            limit: Some(10),
            food_category: Some("dairy".to_string()),
            ..ReportQuery::default()
        };
        assert_eq!(
            report_url(endpoint, &query),
            "/api/users/detailed-spoilage-report?page=3&limit=10&food_category=dairy"
        );
    }
}
