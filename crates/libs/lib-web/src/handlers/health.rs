//! # Health Check Handler

use axum::extract::State;
use axum::Json;
use lib_core::dto::HealthResponse;
use lib_core::Config;
use lib_utils::time::{format_time, now_utc};

/// `GET /api/health` - report that the service is up.
///
/// The body is structurally identical across calls; only `timestamp`
/// changes.
pub async fn health(State(config): State<Config>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Server is running".to_string(),
        port: config.port,
        timestamp: format_time(now_utc()),
    })
}
