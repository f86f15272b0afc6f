//! # Server Setup
//!
//! Server context, route registration, and HTTP server lifecycle.
//!
//! `start_server` sequences startup strictly: configuration, then the
//! database connection (fatal on failure), then the listener. The listener
//! is never bound before the connector has succeeded, and shutdown closes
//! the database connection before returning.

// region: --- Imports
use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;
use lib_core::model::store::{self, ConnectErrorHint, UserRepository};
use lib_core::{Config, Db};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::handlers;
use crate::middleware::{apply_cors, log_requests, require_auth, stamp_req, RequestStamp};
// endregion: --- Imports

// region: --- AppState

/// Application state shared across all routes.
///
/// Constructed once at startup and handed to the router; there is no
/// module-level mutable state.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl FromRef<AppState> for Db {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region: --- Server Setup

/// Initialize and run the HTTP server until interrupted.
///
/// # Errors
///
/// Returns an error if configuration loading or validation fails, the
/// initial database connection fails, or binding/serving fails. The caller
/// (the binary) decides process termination; nothing here exits.
pub async fn start_server() -> anyhow::Result<()> {
    init_tracing();

    info!("JWT AUTH API STARTING");

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    info!("Connecting to MongoDB...");
    let client = match store::connect(&config.mongodb_uri).await {
        Ok(client) => client,
        Err(err) => {
            let hint = ConnectErrorHint::from_error(&err);
            error!("[DB] Initial connection failed: {err}");
            error!("[DB] Hint: {hint}");
            return Err(err.into());
        }
    };

    let db = store::database(&client);
    info!("[DB] MongoDB connected: database '{}'", db.name());

    if let Err(err) = UserRepository::ensure_indexes(&db).await {
        warn!("[DB] Failed to ensure indexes: {err}");
    }

    let state = AppState {
        db,
        config: config.clone(),
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    info!(" SERVER READY: http://localhost:{}", config.port);
    log_server_info();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("[SHUTDOWN] Closing MongoDB connection...");
    client.shutdown().await;
    info!("[SHUTDOWN] Connection closed");

    Ok(())
}

/// Create the application router with all routes and middleware.
///
/// Layer order, outermost first: CORS (so preflights short-circuit before
/// anything else and every response is stamped), request stamp, trace span,
/// request/response logging.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/auth/signup", post(handlers::auth::signup))
        .route("/api/auth/signin", post(handlers::auth::signin))
        .route("/api/auth/verify-token", post(handlers::auth::verify_token))
        .route(
            "/api/auth/me",
            get(handlers::auth::me)
                .layer(axum::middleware::from_fn_with_state(state.clone(), require_auth)),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestStamp>()
                    .map(|s| s.id.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(axum::middleware::from_fn(apply_cors))
}

fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" => tracing_subscriber::EnvFilter::new("trace"),
        "debug" => tracing_subscriber::EnvFilter::new("debug"),
        "warn" => tracing_subscriber::EnvFilter::new("warn"),
        "error" => tracing_subscriber::EnvFilter::new("error"),
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");
}

/// Resolve when the interrupt signal arrives.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install interrupt handler");
    info!("[SHUTDOWN] Interrupt received, shutting down");
}

/// Log the set of mounted endpoints.
fn log_server_info() {
    info!(" AUTH:");
    info!("   • POST /api/auth/signup");
    info!("   • POST /api/auth/signin");
    info!("   • GET  /api/auth/me");
    info!("   • POST /api/auth/verify-token");
    info!(" HEALTH:");
    info!("   • GET  /api/health");
}
// endregion: --- Server Setup

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::auth::tests::{test_config, test_state};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use lib_utils::time::{now_utc, parse_utc};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        create_router(test_state().await)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&body).expect("body should be JSON")
    }

    fn assert_cors_headers(headers: &axum::http::HeaderMap) {
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(
            headers.get("access-control-allow-methods").unwrap(),
            "GET, POST, PUT, DELETE, OPTIONS, HEAD"
        );
        assert_eq!(
            headers.get("access-control-allow-headers").unwrap(),
            "Origin, X-Requested-With, Content-Type, Accept, Authorization, Cache-Control"
        );
        assert_eq!(headers.get("access-control-max-age").unwrap(), "3600");
    }

    #[tokio::test]
    async fn test_health_returns_expected_shape() {
        let before = now_utc();

        let response = test_app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Server is running");
        assert_eq!(json["port"], test_config().port);

        let timestamp = parse_utc(json["timestamp"].as_str().expect("timestamp is a string"))
            .expect("timestamp should be RFC3339");
        let after = now_utc();
        assert!(timestamp >= before - chrono::Duration::seconds(1));
        assert!(timestamp <= after + chrono::Duration::seconds(1));
    }

    #[tokio::test]
    async fn test_health_idempotent_modulo_timestamp() {
        let app = test_app().await;

        let first = body_json(
            app.clone()
                .oneshot(
                    Request::builder()
                        .uri("/api/health")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap(),
        )
        .await;
        let second = body_json(
            app.oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap(),
        )
        .await;

        assert_eq!(first["message"], second["message"]);
        assert_eq!(first["port"], second["port"]);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404_json() {
        let response = test_app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_cors_headers(response.headers());

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "error": "Route not found" }));
    }

    #[tokio::test]
    async fn test_preflight_any_path_returns_empty_200() {
        let response = test_app()
            .await
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/auth/signup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors_headers(response.headers());

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_cors_headers_present_on_success_responses() {
        let response = test_app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_cors_headers(response.headers());
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let response = test_app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let request_id = response
            .headers()
            .get("x-request-id")
            .expect("x-request-id header should be set")
            .to_str()
            .unwrap();
        uuid::Uuid::parse_str(request_id).expect("x-request-id should be a UUID");
    }
}
