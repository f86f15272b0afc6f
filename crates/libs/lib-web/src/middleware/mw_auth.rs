//! # Authentication Middleware
//!
//! Validates the `Authorization: Bearer <token>` header and injects the
//! authenticated user's [`Claims`] into request extensions.
//!
//! Handlers behind this middleware extract claims with `Extension<Claims>`:
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use lib_auth::Claims;
//!
//! async fn protected_handler(Extension(claims): Extension<Claims>) -> String {
//!     format!("Hello, {}!", claims.username)
//! }
//! ```

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use lib_auth::decode_jwt;
use lib_core::{AppError, Config};
use tracing::{debug, warn};

/// Authentication middleware for protected routes.
///
/// - **Valid token**: continues to the handler with `Claims` in extensions
/// - **Missing/invalid token**: responds `401 Unauthorized`
pub async fn require_auth(
    State(config): State<Config>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            warn!("[AUTH] Missing Authorization header");
            AppError::Unauthorized("Missing Authorization header".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("[AUTH] Invalid Authorization header format");
        AppError::Unauthorized("Invalid Authorization header format".to_string())
    })?;

    let claims = decode_jwt(token, &config.jwt_secret).map_err(|err| {
        warn!("[AUTH] Token validation failed: {err}");
        AppError::Unauthorized("Invalid or expired token".to_string())
    })?;

    debug!("[AUTH] Authenticated user: {} (id: {})", claims.username, claims.sub);

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
