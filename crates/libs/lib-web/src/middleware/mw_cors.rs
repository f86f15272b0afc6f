//! # CORS Middleware
//!
//! Manual cross-origin headers stamped on every response.
//!
//! tower-http's `CorsLayer` only emits the method/header/max-age headers on
//! preflight responses, while this service advertises the full permissive
//! header set on every response, so the headers are applied by hand here.
//!
//! ## Behavior
//!
//! - `OPTIONS` requests short-circuit: status 200, empty body, CORS headers
//!   set, no further middleware or handler runs.
//! - Every other response gets the same four headers appended, regardless
//!   of route outcome.

use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS, HEAD";
const ALLOW_HEADERS: &str =
    "Origin, X-Requested-With, Content-Type, Accept, Authorization, Cache-Control";
const MAX_AGE_SECS: &str = "3600";

/// CORS middleware. Must be the outermost layer so preflights never reach
/// the router and error responses still carry the headers.
pub async fn apply_cors(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        set_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(req).await;
    set_cors_headers(response.headers_mut());
    response
}

fn set_cors_headers(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(MAX_AGE_SECS));
}
