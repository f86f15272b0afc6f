//! # Application Configuration
//!
//! Configuration is resolved once from environment variables at startup and
//! validated so the process fails fast if misconfigured. The resolved value
//! is carried in the server context; nothing here is global.

use lib_utils::envs::{self, get_env, get_env_parse};

/// Port the HTTP listener binds when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5001;

/// Connection string used when `MONGODB_URI` is unset.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/jwt-auth-db";

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP listener binds
    pub port: u16,

    /// MongoDB connection string
    pub mongodb_uri: String,

    /// Secret key for JWT token signing and verification
    ///
    /// **Must be at least 32 characters long** for security.
    pub jwt_secret: String,

    /// JWT token validity period in hours
    ///
    /// After this period, users must re-authenticate.
    /// Valid range: 1-720 hours (1 hour to 30 days)
    pub jwt_expiration_hours: i64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let port = match get_env_parse::<u16>("PORT") {
            Ok(port) => port,
            Err(envs::Error::MissingEnv(_)) => DEFAULT_PORT,
            Err(envs::Error::WrongFormat(_)) => {
                return Err("PORT must be a valid port number".to_string());
            }
        };

        let mongodb_uri =
            get_env("MONGODB_URI").unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());

        let jwt_secret =
            get_env("JWT_SECRET").map_err(|_| "JWT_SECRET must be set in environment")?;

        let jwt_expiration_hours = match get_env_parse::<i64>("JWT_EXPIRATION_HOURS") {
            Ok(hours) => hours,
            Err(envs::Error::MissingEnv(_)) => 24,
            Err(envs::Error::WrongFormat(_)) => {
                return Err("JWT_EXPIRATION_HOURS must be a valid number".to_string());
            }
        };

        Ok(Self {
            port,
            mongodb_uri,
            jwt_secret,
            jwt_expiration_hours,
        })
    }

    /// Validate configuration values against security and business rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }

        if self.jwt_expiration_hours < 1 || self.jwt_expiration_hours > 720 {
            return Err("JWT_EXPIRATION_HOURS must be between 1 and 720 (30 days)".to_string());
        }

        Ok(())
    }
}
