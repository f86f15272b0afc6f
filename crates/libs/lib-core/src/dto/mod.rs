//! # Data Transfer Objects
//!
//! Wire-format request and response structures.

pub mod auth;
pub mod health;

pub use auth::{
    AuthResponse, ErrorResponse, SigninRequest, SignupRequest, UserInfo, VerifyTokenRequest,
    VerifyTokenResponse,
};
pub use health::HealthResponse;
