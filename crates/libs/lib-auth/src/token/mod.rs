//! # JWT Token Management
//!
//! JWT token generation and validation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT Claims structure containing user authentication information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Username
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Expiration time as an RFC3339 string, if representable.
    pub fn expires_at_rfc3339(&self) -> Option<String> {
        DateTime::<Utc>::from_timestamp(self.exp, 0).map(|dt| dt.to_rfc3339())
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid or expired token: {0}")]
    Decode(#[source] jsonwebtoken::errors::Error),
}

/// Encode a JWT token with user claims.
pub fn encode_jwt(
    user_id: &str,
    username: &str,
    secret: &str,
    expiration_hours: i64,
) -> Result<String, TokenError> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Encode)
}

/// Decode and validate a JWT token.
pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(TokenError::Decode)?;

    Ok(token_data.claims)
}
