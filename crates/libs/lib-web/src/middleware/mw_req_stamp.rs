//! # Request Stamping Middleware
//!
//! Adds a unique ID and receive timestamp to each request, available to
//! handlers via `Extension<RequestStamp>` and echoed to clients in the
//! `X-Request-ID` response header.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};
use lib_utils::time::now_utc;
use uuid::Uuid;

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier
    pub id: Uuid,
    /// Time the request was received
    pub time_in: DateTime<Utc>,
}

/// Request stamping middleware.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp {
        id: Uuid::new_v4(),
        time_in: now_utc(),
    };

    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id.to_string()) {
        res.headers_mut().insert("x-request-id", header_value);
    }

    res
}
