//! # Middleware
//!
//! Axum middleware for CORS, authentication, request stamping, and logging.
//!
//! ## Modules
//!
//! - **[`mw_cors`]**: manual CORS headers and preflight short-circuit
//! - **[`mw_auth`]**: JWT authentication for protected routes
//! - **[`mw_req_stamp`]**: per-request ID and receive timestamp
//! - **[`mw_logging`]**: request/response logging

// region: --- Modules
pub mod mw_auth;
pub mod mw_cors;
pub mod mw_logging;
pub mod mw_req_stamp;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_auth::require_auth;
pub use mw_cors::apply_cors;
pub use mw_logging::log_requests;
pub use mw_req_stamp::{stamp_req, RequestStamp};
// endregion: --- Re-exports
