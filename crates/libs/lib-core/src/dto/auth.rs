//! # Authentication Data Transfer Objects
//!
//! Request and response structures for the authentication endpoints.
//!
//! ## Endpoints Using These DTOs
//!
//! - `POST /api/auth/signup` - [`SignupRequest`] -> [`AuthResponse`]
//! - `POST /api/auth/signin` - [`SigninRequest`] -> [`AuthResponse`]
//! - `GET  /api/auth/me` - [`UserInfo`]
//! - `POST /api/auth/verify-token` - [`VerifyTokenRequest`] -> [`VerifyTokenResponse`]
//!
//! ## Wire Format
//!
//! All DTOs use **snake_case** field names in JSON (default serde behavior).
//! Optional fields are omitted when `None`.

use serde::{Deserialize, Serialize};

use crate::model::store::models::User;

/// Signup request for new user registration.
///
/// Password is sent in plaintext over the wire and hashed server-side with
/// Argon2 before it is stored. Never log or store it as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Signin request with email or username.
///
/// `email_or_username` accepts either an email address (contains `@`) or a
/// username, for flexibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigninRequest {
    pub email_or_username: String,
    pub password: String,
}

/// Authentication response returned on successful signup or signin.
///
/// The `token` field should be sent on subsequent requests as
/// `Authorization: Bearer <token>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub token: String,
    pub message: String,
}

/// Public user information, safe to send to clients.
///
/// Intentionally excludes the password hash and any other internal state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

impl UserInfo {
    /// Project a stored user document onto its public shape.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user
                .created_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
        }
    }
}

/// Token verification request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyTokenRequest {
    pub token: String,
}

/// Token verification response.
///
/// On success `valid` is `true` and the claim fields are populated; on
/// failure `valid` is `false` and the claim fields are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl VerifyTokenResponse {
    /// Response for a token that failed verification.
    pub fn invalid() -> Self {
        Self {
            valid: false,
            user_id: None,
            username: None,
            expires_at: None,
        }
    }
}

/// Standard error response for all API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
