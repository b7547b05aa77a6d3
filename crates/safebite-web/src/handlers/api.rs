//! API proxy handlers for communicating with the backend
//!
//! Every handler forwards to the backend and, on failure, degrades to an
//! explicit JSON error payload with empty data so the SPA always has a
//! well-formed shape to render.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use safebite_core::types::ReportQuery;

use crate::state::AppState;

fn bearer_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}

/// Query parameters for the activity-data endpoint
#[derive(Debug, Deserialize)]
pub struct ActivityDataQuery {
    /// Requested granularity (monthly or yearly)
    pub filter: Option<String>,
}

/// Query parameters for the statistics endpoint
#[derive(Debug, Deserialize)]
pub struct StatisticsQuery {
    /// Requested statistics kind
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Device-usage buckets for the dashboard chart
pub async fn activity_data(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<ActivityDataQuery>,
) -> Json<Value> {
    let filter = params.filter.unwrap_or_else(|| "monthly".to_string());
    match state
        .api_client
        .get_activity_data(&filter, bearer_of(&headers).as_deref())
        .await
    {
        Ok(data) => Json(data),
        Err(e) => {
            error!("Failed to fetch activity data: {}", e);
            Json(json!({
                "error": "Failed to fetch activity data",
                "message": e.to_string(),
                "data": {}
            }))
        }
    }
}

/// Activity counters for the dashboard header
pub async fn activity_counts(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Value> {
    match state
        .api_client
        .get_activity_counts(bearer_of(&headers).as_deref())
        .await
    {
        Ok(counts) => Json(counts),
        Err(e) => {
            error!("Failed to fetch activity counts: {}", e);
            Json(json!({
                "error": "Failed to fetch activity counts",
                "message": e.to_string(),
                "counts": { "today": 0, "last7d": 0, "last30d": 0 }
            }))
        }
    }
}

/// Aggregate statistics
pub async fn statistics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<StatisticsQuery>,
) -> Json<Value> {
    let kind = params.kind.unwrap_or_else(|| "dashboard-stats".to_string());
    match state
        .api_client
        .get_statistics(&kind, bearer_of(&headers).as_deref())
        .await
    {
        Ok(stats) => Json(stats),
        Err(e) => {
            error!("Failed to fetch statistics: {}", e);
            Json(json!({
                "error": "Failed to fetch statistics",
                "message": e.to_string()
            }))
        }
    }
}

/// Registered user accounts
pub async fn users(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<Value> {
    match state
        .api_client
        .get_users(bearer_of(&headers).as_deref())
        .await
    {
        Ok(users) => Json(users),
        Err(e) => {
            error!("Failed to fetch users: {}", e);
            Json(json!({
                "error": "Failed to fetch users",
                "message": e.to_string(),
                "users": []
            }))
        }
    }
}

/// All feedback entries
pub async fn feedbacks_list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Value> {
    match state
        .api_client
        .get_feedbacks(bearer_of(&headers).as_deref())
        .await
    {
        Ok(feedbacks) => Json(feedbacks),
        Err(e) => {
            error!("Failed to fetch feedbacks: {}", e);
            Json(json!({
                "error": "Failed to fetch feedbacks",
                "message": e.to_string(),
                "feedbacks": []
            }))
        }
    }
}

/// Create a feedback entry
pub async fn feedback_create(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    match state
        .api_client
        .create_feedback(&body, bearer_of(&headers).as_deref())
        .await
    {
        Ok(created) => Json(created),
        Err(e) => {
            error!("Failed to create feedback: {}", e);
            Json(json!({
                "error": "Failed to create feedback",
                "message": e.to_string()
            }))
        }
    }
}

/// Update a feedback entry
pub async fn feedback_update(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    match state
        .api_client
        .update_feedback(id, &body, bearer_of(&headers).as_deref())
        .await
    {
        Ok(updated) => Json(updated),
        Err(e) => {
            error!("Failed to update feedback {}: {}", id, e);
            Json(json!({
                "error": "Failed to update feedback",
                "message": e.to_string()
            }))
        }
    }
}

/// The monitored device fleet
pub async fn devices_list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Value> {
    match state
        .api_client
        .get_devices(bearer_of(&headers).as_deref())
        .await
    {
        Ok(devices) => Json(devices),
        Err(e) => {
            error!("Failed to fetch devices: {}", e);
            Json(json!({
                "error": "Failed to fetch devices",
                "message": e.to_string(),
                "devices": []
            }))
        }
    }
}

/// Register a new device
pub async fn device_create(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    match state
        .api_client
        .create_device(&body, bearer_of(&headers).as_deref())
        .await
    {
        Ok(created) => Json(created),
        Err(e) => {
            error!("Failed to create device: {}", e);
            Json(json!({
                "error": "Failed to create device",
                "message": e.to_string()
            }))
        }
    }
}

/// Update an existing device
pub async fn device_update(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    match state
        .api_client
        .update_device(id, &body, bearer_of(&headers).as_deref())
        .await
    {
        Ok(updated) => Json(updated),
        Err(e) => {
            error!("Failed to update device {}: {}", id, e);
            Json(json!({
                "error": "Failed to update device",
                "message": e.to_string()
            }))
        }
    }
}

/// Remove a device from the fleet
pub async fn device_delete(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Json<Value> {
    match state
        .api_client
        .delete_device(id, bearer_of(&headers).as_deref())
        .await
    {
        Ok(()) => Json(json!({ "deleted": id })),
        Err(e) => {
            error!("Failed to delete device {}: {}", id, e);
            Json(json!({
                "error": "Failed to delete device",
                "message": e.to_string()
            }))
        }
    }
}

fn empty_report() -> Value {
    json!({
        "rows": [],
        "pagination": { "page": 1, "per_page": 10, "total": 0, "total_pages": 1 }
    })
}

/// Fleet-wide detailed spoilage report
pub async fn admin_report(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ReportQuery>,
) -> Json<Value> {
    match state
        .api_client
        .get_report(
            "/api/admin/detailed-spoilage-report",
            &query,
            bearer_of(&headers).as_deref(),
        )
        .await
    {
        Ok(report) => Json(report),
        Err(e) => {
            error!("Failed to fetch admin report: {}", e);
            let mut fallback = empty_report();
            fallback["error"] = json!(e.to_string());
            Json(fallback)
        }
    }
}

/// Own-device detailed spoilage report
pub async fn user_report(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ReportQuery>,
) -> Json<Value> {
    match state
        .api_client
        .get_report(
            "/api/users/detailed-spoilage-report",
            &query,
            bearer_of(&headers).as_deref(),
        )
        .await
    {
        Ok(report) => Json(report),
        Err(e) => {
            error!("Failed to fetch user report: {}", e);
            let mut fallback = empty_report();
            fallback["error"] = json!(e.to_string());
            Json(fallback)
        }
    }
}

/// Aggregate sensor analytics
pub async fn analytics_summary(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Value> {
    match state
        .api_client
        .get_analytics_summary(bearer_of(&headers).as_deref())
        .await
    {
        Ok(summary) => Json(summary),
        Err(e) => {
            error!("Failed to fetch analytics summary: {}", e);
            Json(json!({
                "error": "Failed to fetch analytics summary",
                "message": e.to_string()
            }))
        }
    }
}

/// Per-record sensor readings
pub async fn analytics_readings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Value> {
    match state
        .api_client
        .get_analytics_readings(bearer_of(&headers).as_deref())
        .await
    {
        Ok(readings) => Json(readings),
        Err(e) => {
            error!("Failed to fetch sensor readings: {}", e);
            Json(json!({
                "error": "Failed to fetch sensor readings",
                "message": e.to_string(),
                "readings": []
            }))
        }
    }
}

/// Current ML spoilage predictions
pub async fn predictions(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Value> {
    match state
        .api_client
        .get_predictions(bearer_of(&headers).as_deref())
        .await
    {
        Ok(predictions) => Json(predictions),
        Err(e) => {
            error!("Failed to fetch predictions: {}", e);
            Json(json!({
                "error": "Failed to fetch predictions",
                "message": e.to_string(),
                "predictions": []
            }))
        }
    }
}

/// Admin audit log
pub async fn admin_log(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<Value> {
    match state
        .api_client
        .get_admin_log(bearer_of(&headers).as_deref())
        .await
    {
        Ok(logs) => Json(logs),
        Err(e) => {
            error!("Failed to fetch admin log: {}", e);
            Json(json!({
                "error": "Failed to fetch admin log",
                "message": e.to_string(),
                "logs": []
            }))
        }
    }
}

/// User activity log
pub async fn user_activity(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Value> {
    match state
        .api_client
        .get_user_activity(bearer_of(&headers).as_deref())
        .await
    {
        Ok(activities) => Json(activities),
        Err(e) => {
            error!("Failed to fetch user activity: {}", e);
            Json(json!({
                "error": "Failed to fetch user activity",
                "message": e.to_string(),
                "activities": []
            }))
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "OK");
    }

    #[test]
    fn test_bearer_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_of(&headers), None);

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );
        assert_eq!(bearer_of(&headers), Some("Bearer abc123".to_string()));
    }

    #[test]
    fn test_empty_report_shape() {
        let report = empty_report();
        assert!(report["rows"].as_array().unwrap().is_empty());
        assert_eq!(report["pagination"]["total_pages"], 1);
    }
}
