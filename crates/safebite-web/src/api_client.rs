//! HTTP client for communicating with the `SafeBite` backend API
//!
//! The shell does not own any data; every method forwards to the backend
//! and hands the JSON payload through untouched. Authorization comes from
//! a configured service token when present, otherwise the caller's bearer
//! header is forwarded as-is.

use std::time::Duration;

use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder};
use safebite_core::types::ReportQuery;
use safebite_core::{Error, Result};
use serde_json::Value;

/// API client for making HTTP requests to the `SafeBite` backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>, request_timeout: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(request_timeout))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
            api_token: None,
        }
    }

    /// Set the service token for authentication
    #[must_use]
    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let request = self.client.request(method, url);

        if let Some(ref token) = self.api_token {
            request.bearer_auth(token)
        } else if let Some(bearer) = bearer {
            request.header(AUTHORIZATION, bearer)
        } else {
            request
        }
    }

    async fn execute(&self, request: RequestBuilder, path: &str) -> Result<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Other(format!("request to {path} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("backend error")
                    .to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::Other(format!("failed to parse response from {path}: {e}")))
    }

    async fn get_json(&self, path: &str, bearer: Option<&str>) -> Result<Value> {
        self.execute(self.request(Method::GET, path, bearer), path)
            .await
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        body: &Value,
    ) -> Result<Value> {
        self.execute(self.request(method, path, bearer).json(body), path)
            .await
    }

    /// Device-usage buckets for the dashboard chart
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_activity_data(&self, filter: &str, bearer: Option<&str>) -> Result<Value> {
        let path = format!(
            "/api/admin/sensor/activity-data?filter={}",
            urlencoding::encode(filter)
        );
        self.get_json(&path, bearer).await
    }

    /// Activity counters for the dashboard header
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_activity_counts(&self, bearer: Option<&str>) -> Result<Value> {
        self.get_json("/api/admin/sensor/activity-counts", bearer)
            .await
    }

    /// Aggregate statistics of the requested kind
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_statistics(&self, kind: &str, bearer: Option<&str>) -> Result<Value> {
        let path = format!("/api/admin/statistics?type={}", urlencoding::encode(kind));
        self.get_json(&path, bearer).await
    }

    /// Registered user accounts
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_users(&self, bearer: Option<&str>) -> Result<Value> {
        self.get_json("/api/admin/users", bearer).await
    }

    /// All feedback entries
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_feedbacks(&self, bearer: Option<&str>) -> Result<Value> {
        self.get_json("/api/feedbacks", bearer).await
    }

    /// Create a feedback entry
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn create_feedback(&self, body: &Value, bearer: Option<&str>) -> Result<Value> {
        self.send_json(Method::POST, "/api/feedbacks", bearer, body)
            .await
    }

    /// Update a feedback entry (status and reply)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn update_feedback(
        &self,
        id: i64,
        body: &Value,
        bearer: Option<&str>,
    ) -> Result<Value> {
        self.send_json(Method::PUT, &format!("/api/feedbacks/{id}"), bearer, body)
            .await
    }

    /// The monitored device fleet
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_devices(&self, bearer: Option<&str>) -> Result<Value> {
        self.get_json("/api/device-management/devices", bearer).await
    }

    /// Register a new device
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn create_device(&self, body: &Value, bearer: Option<&str>) -> Result<Value> {
        self.send_json(Method::POST, "/api/device-management/devices", bearer, body)
            .await
    }

    /// Update an existing device
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn update_device(
        &self,
        id: i64,
        body: &Value,
        bearer: Option<&str>,
    ) -> Result<Value> {
        self.send_json(
            Method::PUT,
            &format!("/api/device-management/devices/{id}"),
            bearer,
            body,
        )
        .await
    }

    /// Remove a device from the fleet
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails.
    pub async fn delete_device(&self, id: i64, bearer: Option<&str>) -> Result<()> {
        let path = format!("/api/device-management/devices/{id}");
        let response = self
            .request(Method::DELETE, &path, bearer)
            .send()
            .await
            .map_err(|e| Error::Other(format!("request to {path} failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Http {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("backend error")
                    .to_string(),
            })
        }
    }

    /// One server-paginated page of the detailed spoilage report
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_report(
        &self,
        endpoint: &str,
        query: &ReportQuery,
        bearer: Option<&str>,
    ) -> Result<Value> {
        let params = query.query_string();
        let path = if params.is_empty() {
            endpoint.to_string()
        } else {
            format!("{endpoint}?{params}")
        };
        self.get_json(&path, bearer).await
    }

    /// Aggregate sensor analytics
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_analytics_summary(&self, bearer: Option<&str>) -> Result<Value> {
        self.get_json("/api/sensor-analytics/summary", bearer).await
    }

    /// Per-record sensor readings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_analytics_readings(&self, bearer: Option<&str>) -> Result<Value> {
        self.get_json("/api/sensor-analytics/readings", bearer)
            .await
    }

    /// Current ML spoilage predictions
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_predictions(&self, bearer: Option<&str>) -> Result<Value> {
        self.get_json("/api/ml/predictions", bearer).await
    }

    /// Admin audit log
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_admin_log(&self, bearer: Option<&str>) -> Result<Value> {
        self.get_json("/api/admin/logs", bearer).await
    }

    /// User activity log
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_user_activity(&self, bearer: Option<&str>) -> Result<Value> {
        self.get_json("/api/admin/user-activity", bearer).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_construction() {
        let client = ApiClient::new("http://backend:8080", 30);
        assert_eq!(client.base_url, "http://backend:8080");
        assert!(client.api_token.is_none());

        let client = client.with_api_token("secret");
        assert_eq!(client.api_token.as_deref(), Some("secret"));
    }
}
