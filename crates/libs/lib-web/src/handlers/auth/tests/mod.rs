//! # Auth Handler Tests
//!
//! Test suite for the authentication handlers. Tests that never touch the
//! database run against a lazily-connected client (the driver performs no
//! I/O until the first operation); full flows against a live MongoDB live
//! in `integration` behind `#[ignore]`.

mod verify;

use crate::server::{create_router, AppState};
use axum::Router;
use lib_core::{database, Config};
use mongodb::Client;

/// Create test config with a dedicated test database.
pub fn test_config() -> Config {
    Config {
        port: 5001,
        mongodb_uri: "mongodb://localhost:27017/jwt-auth-test".to_string(),
        jwt_secret: "test-secret-key-must-be-at-least-32-characters-long!".to_string(),
        jwt_expiration_hours: 24,
    }
}

/// Build application state without connecting.
pub async fn test_state() -> AppState {
    let config = test_config();
    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .expect("Test URI should parse");

    AppState {
        db: database(&client),
        config,
    }
}

/// Create the full application router for tests.
pub async fn test_app() -> Router {
    create_router(test_state().await)
}
