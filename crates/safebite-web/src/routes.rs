//! Route definitions for the web shell

use crate::{
    handlers::{api, pages},
    state::AppState,
};
use axum::{
    routing::{get, put},
    Router,
};
use safebite_core::PageKey;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Build the complete web application router.
///
/// Every SPA page path serves the same shell document (the client-side
/// router picks the view), the `/api` routes proxy to the backend, and
/// `/pkg` serves the compiled application bundle.
pub fn build_routes() -> Router<Arc<AppState>> {
    // Page routes come from the page registry, not a hardcoded list.
    let mut router = Router::new();
    for page in PageKey::ALL {
        router = router.route(page.path(), get(pages::index));
    }

    router
        // API proxy routes
        .route("/api/admin/sensor/activity-data", get(api::activity_data))
        .route(
            "/api/admin/sensor/activity-counts",
            get(api::activity_counts),
        )
        .route("/api/admin/statistics", get(api::statistics))
        .route("/api/admin/users", get(api::users))
        .route(
            "/api/feedbacks",
            get(api::feedbacks_list).post(api::feedback_create),
        )
        .route("/api/feedbacks/:id", put(api::feedback_update))
        .route(
            "/api/device-management/devices",
            get(api::devices_list).post(api::device_create),
        )
        .route(
            "/api/device-management/devices/:id",
            put(api::device_update).delete(api::device_delete),
        )
        .route(
            "/api/admin/detailed-spoilage-report",
            get(api::admin_report),
        )
        .route("/api/users/detailed-spoilage-report", get(api::user_report))
        .route("/api/sensor-analytics/summary", get(api::analytics_summary))
        .route(
            "/api/sensor-analytics/readings",
            get(api::analytics_readings),
        )
        .route("/api/ml/predictions", get(api::predictions))
        .route("/api/admin/logs", get(api::admin_log))
        .route("/api/admin/user-activity", get(api::user_activity))
        // Health check
        .route("/health", get(api::health_check))
        // Compiled SPA bundle
        .nest_service("/pkg", ServeDir::new("pkg"))
        // Unknown paths still get the shell; the SPA renders its own 404
        .fallback(pages::index)
}
