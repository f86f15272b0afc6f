//! # Health Check DTO

use serde::{Deserialize, Serialize};

/// Health check response.
///
/// Repeated calls are structurally identical; only `timestamp` changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub message: String,
    pub port: u16,
    pub timestamp: String,
}
