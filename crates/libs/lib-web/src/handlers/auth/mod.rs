//! # Authentication Handlers
//!
//! HTTP request handlers for the user authentication endpoints.
//!
//! ## Overview
//!
//! - Signup with username/email/password
//! - Signin with email or username
//! - Current-user lookup from a Bearer token
//! - Standalone JWT verification
//!
//! Passwords are hashed with Argon2 before storage and tokens are HS256
//! JWTs; both live in `lib_auth`. Persistence goes through
//! [`UserRepository`].

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::Extension;
use lib_auth::{decode_jwt, encode_jwt, hash_password, verify_password, Claims, PwdError};
use lib_core::dto::{
    AuthResponse, SigninRequest, SignupRequest, UserInfo, VerifyTokenRequest, VerifyTokenResponse,
};
use lib_core::model::store::models::User;
use lib_core::model::store::UserRepository;
use lib_core::{AppError, Config, Db};
use lib_utils::validation::{validate_email, validate_min_length};
use mongodb::bson::oid::ObjectId;
use tracing::{debug, info, warn};

/// Signup handler - creates a new user account.
///
/// # Validation
///
/// - Username must be at least 3 characters
/// - Email must look like an email address
/// - Password must be at least 8 characters (checked by `hash_password`)
/// - Email and username must be unique
///
/// # Returns
///
/// * `201 Created` with [`AuthResponse`] on success
/// * `400` on validation failure, `409` on duplicate email/username
pub async fn signup(
    State(db): State<Db>,
    State(config): State<Config>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    info!("[SIGNUP] New user signup request: {}", req.username);

    validate_min_length(&req.username, 3, "Username").map_err(|msg| {
        warn!("[SIGNUP] {msg}");
        AppError::InvalidInput(msg)
    })?;

    validate_email(&req.email).map_err(|msg| {
        warn!("[SIGNUP] Invalid email format: {}", req.email);
        AppError::InvalidInput(msg)
    })?;

    debug!("[SIGNUP] Hashing password...");
    let password_hash = hash_password(&req.password).map_err(|err| match err {
        PwdError::TooShort => {
            warn!("[SIGNUP] Password too short");
            AppError::InvalidInput(err.to_string())
        }
        other => AppError::Internal(other.to_string()),
    })?;

    if UserRepository::find_by_email(&db, &req.email).await?.is_some() {
        warn!("[SIGNUP] Email already registered: {}", req.email);
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    if UserRepository::find_by_username(&db, &req.username)
        .await?
        .is_some()
    {
        warn!("[SIGNUP] Username already taken: {}", req.username);
        return Err(AppError::Conflict("Username already taken".to_string()));
    }

    debug!("[SIGNUP] Creating user...");
    let user = UserRepository::create(&db, &req.username, &req.email, &password_hash).await?;

    let token = issue_token(&user, &config)?;

    info!(
        "[SIGNUP] User created: {} (id: {})",
        user.username,
        user.id.map(|id| id.to_hex()).unwrap_or_default()
    );

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: UserInfo::from_user(&user),
            token,
            message: "Signup successful".to_string(),
        }),
    ))
}

/// Signin handler - authenticates an existing user.
///
/// Accepts either an email (contains `@`) or a username, verifies the
/// password with Argon2, updates `last_login` best-effort, and issues a
/// fresh JWT.
pub async fn signin(
    State(db): State<Db>,
    State(config): State<Config>,
    Json(req): Json<SigninRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    info!("[SIGNIN] Signin attempt: {}", req.email_or_username);

    let user = if req.email_or_username.contains('@') {
        UserRepository::find_by_email(&db, &req.email_or_username).await?
    } else {
        UserRepository::find_by_username(&db, &req.email_or_username).await?
    };

    let user = user.ok_or_else(|| {
        warn!("[SIGNIN] User not found: {}", req.email_or_username);
        AppError::Unauthorized("Invalid credentials".to_string())
    })?;

    if !user.is_active {
        warn!("[SIGNIN] Account deactivated: {}", user.username);
        return Err(AppError::Forbidden("Account is deactivated".to_string()));
    }

    debug!("[SIGNIN] Verifying password...");
    let is_valid = verify_password(&req.password, &user.password_hash)
        .map_err(|err| AppError::Internal(err.to_string()))?;

    if !is_valid {
        warn!("[SIGNIN] Invalid password for user: {}", user.username);
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    // Best-effort; a failed timestamp update must not block signin.
    if let Some(id) = user.id {
        if let Err(err) = UserRepository::update_last_login(&db, id).await {
            debug!("[SIGNIN] Failed to update last login: {err}");
        }
    }

    let token = issue_token(&user, &config)?;

    info!("[SIGNIN] User authenticated: {}", user.username);

    Ok(Json(AuthResponse {
        user: UserInfo::from_user(&user),
        token,
        message: "Signin successful".to_string(),
    }))
}

/// Current-user handler.
///
/// Runs behind `require_auth`, so the claims extension is always present.
/// Returns `404` if the account behind the token no longer exists.
pub async fn me(
    State(db): State<Db>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserInfo>, AppError> {
    let id = ObjectId::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

    let user = UserRepository::find_by_id(&db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserInfo::from_user(&user)))
}

/// Token verification handler.
///
/// Pure JWT check, no database round-trip: a token is valid if it decodes
/// with the configured secret and has not expired.
pub async fn verify_token(
    State(config): State<Config>,
    Json(req): Json<VerifyTokenRequest>,
) -> (StatusCode, Json<VerifyTokenResponse>) {
    match decode_jwt(&req.token, &config.jwt_secret) {
        Ok(claims) => {
            debug!("[VERIFY] Token valid for user: {}", claims.username);
            (
                StatusCode::OK,
                Json(VerifyTokenResponse {
                    valid: true,
                    user_id: Some(claims.sub.clone()),
                    username: Some(claims.username.clone()),
                    expires_at: claims.expires_at_rfc3339(),
                }),
            )
        }
        Err(err) => {
            warn!("[VERIFY] Token verification failed: {err}");
            (StatusCode::UNAUTHORIZED, Json(VerifyTokenResponse::invalid()))
        }
    }
}

fn issue_token(user: &User, config: &Config) -> Result<String, AppError> {
    let user_id = user
        .id
        .map(|id| id.to_hex())
        .ok_or_else(|| AppError::Internal("User record missing id".to_string()))?;

    encode_jwt(
        &user_id,
        &user.username,
        &config.jwt_secret,
        config.jwt_expiration_hours,
    )
    .map_err(|err| AppError::Internal(err.to_string()))
}

#[cfg(test)]
pub mod tests;
