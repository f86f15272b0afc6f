//! # Web Library
//!
//! HTTP handlers, middleware, routing, and server lifecycle.

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{create_router, start_server, AppState};
