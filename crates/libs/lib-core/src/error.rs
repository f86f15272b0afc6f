//! # Centralized Error Handling
//!
//! Application-wide error type [`AppError`] used across all backend modules,
//! following the `thiserror` pattern.
//!
//! Client errors (4xx) surface their message to the caller. Server errors
//! (5xx) are logged in full on the server and surfaced as an opaque
//! `{"error":"Something went wrong!"}` body, so internal detail never
//! reaches clients. The `IntoResponse` impl is the terminal error handler:
//! it never re-throws and always finishes the response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned for every 5xx response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all error scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error from the MongoDB driver.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error (unexpected failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Config(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message exposed to the client.
    ///
    /// For server errors this is always the opaque message; the real error
    /// stays in the server logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::Config(_) | AppError::Database(_) | AppError::Internal(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("[ERROR] {self}");
        } else {
            tracing::debug!("[ERROR] Client error: {self}");
        }

        let body = Json(json!({ "error": self.user_message() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            AppError::InvalidInput("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("nope".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Conflict("taken".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_errors_are_opaque() {
        let err = AppError::Internal("connection pool exhausted".into());

        assert_eq!(err.user_message(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = AppError::NotFound("User not found".into());

        assert_eq!(err.user_message(), "User not found");
    }

    #[tokio::test]
    async fn test_into_response_body_shape() {
        let response = AppError::Internal("secret detail".into()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let json: serde_json::Value =
            serde_json::from_slice(&body).expect("body should be JSON");

        assert_eq!(json, json!({ "error": "Something went wrong!" }));
    }
}
