//! # Token Verification Tests
//!
//! Verification is a pure JWT check, so these run without a database.

use super::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use lib_auth::encode_jwt;
use lib_core::dto::{VerifyTokenRequest, VerifyTokenResponse};
use tower::ServiceExt;

async fn post_verify(token: &str) -> axum::response::Response {
    let req = VerifyTokenRequest {
        token: token.to_string(),
    };

    test_app()
        .await
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/verify-token")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&req).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn verify_body(response: axum::response::Response) -> VerifyTokenResponse {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_verify_valid_token() {
    // Arrange
    let config = test_config();
    let token = encode_jwt(
        "651f7b2e9c1a4d0012345678",
        "alice",
        &config.jwt_secret,
        config.jwt_expiration_hours,
    )
    .expect("JWT encoding should succeed");

    // Act
    let response = post_verify(&token).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);

    let body = verify_body(response).await;
    assert!(body.valid);
    assert_eq!(body.user_id.as_deref(), Some("651f7b2e9c1a4d0012345678"));
    assert_eq!(body.username.as_deref(), Some("alice"));
    assert!(body.expires_at.is_some());
}

#[tokio::test]
async fn test_verify_garbage_token() {
    // Act
    let response = post_verify("not.a.jwt").await;

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = verify_body(response).await;
    assert!(!body.valid);
    assert!(body.user_id.is_none());
}

#[tokio::test]
async fn test_verify_expired_token() {
    // Arrange: issued two hours in the past
    let config = test_config();
    let token = encode_jwt("1", "alice", &config.jwt_secret, -2)
        .expect("JWT encoding should succeed");

    // Act
    let response = post_verify(&token).await;

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(!verify_body(response).await.valid);
}

#[tokio::test]
async fn test_verify_token_signed_with_other_secret() {
    // Arrange
    let token = encode_jwt(
        "1",
        "alice",
        "a-completely-different-32-char-secret!!!",
        24,
    )
    .expect("JWT encoding should succeed");

    // Act
    let response = post_verify(&token).await;

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_without_authorization_header() {
    // Act
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_malformed_authorization_header() {
    // Act: missing the "Bearer " prefix
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header("authorization", "some-raw-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_invalid_bearer_token() {
    // Act
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header("authorization", "Bearer not.a.jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
