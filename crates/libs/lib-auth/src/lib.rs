//! # Authentication Library
//!
//! Password hashing and JWT token management.

pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use pwd::{hash_password, verify_password, PwdError};
pub use token::{decode_jwt, encode_jwt, Claims, TokenError};
