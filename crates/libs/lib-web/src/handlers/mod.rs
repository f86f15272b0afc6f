//! # HTTP Request Handlers
//!
//! Axum request handlers organized by feature domain.
//!
//! ## Handler Modules
//!
//! - **[`auth`]**: user authentication endpoints
//!   - `POST /api/auth/signup` - create new user account
//!   - `POST /api/auth/signin` - authenticate with email/username and password
//!   - `GET  /api/auth/me` - current user (requires Bearer token)
//!   - `POST /api/auth/verify-token` - check a JWT without side effects
//!
//! - **[`health`]**: liveness endpoint
//!   - `GET /api/health`
//!
//! Handlers follow Axum's extractor pattern and return
//! `Result<T, AppError>`; error mapping to HTTP responses lives in
//! `lib_core::error`.

use axum::http::StatusCode;
use axum::Json;
use lib_core::dto::ErrorResponse;

pub mod auth;
pub mod health;

/// Catch-all for requests matching no route.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Route not found".to_string(),
        }),
    )
}
