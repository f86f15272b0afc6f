//! # Database Store
//!
//! MongoDB client setup and repository implementations.
//!
//! The connector builds a single pooled [`Client`] with fixed options and
//! forces the initial connection with a `ping`, so an unreachable database
//! is a startup error rather than a latent one. Connection-state
//! transitions are observed passively: the registered SDAM handler only
//! logs, it never retries or reconnects.

// region: --- Modules
pub mod models;
pub mod user_repository;
// endregion: --- Modules

// region: --- Re-exports
pub use user_repository::UserRepository;
// endregion: --- Re-exports

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::event::sdam::SdamEvent;
use mongodb::event::EventHandler;
use mongodb::options::{ClientOptions, WriteConcern};
use mongodb::Client;
use tracing::{error, info, warn};

/// Type alias for the database handle shared across handlers.
pub type Db = mongodb::Database;

/// Database used when the connection string does not name one.
pub const DEFAULT_DB_NAME: &str = "jwt-auth-db";

const MAX_POOL_SIZE: u32 = 10;
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect to MongoDB with fixed client options.
///
/// The driver connects lazily, so a `ping` against the `admin` database is
/// issued to force the initial connection. On failure the error is returned
/// to the caller; no retry is attempted here.
pub async fn connect(uri: &str) -> mongodb::error::Result<Client> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some("jwt-auth-api".to_string());
    options.max_pool_size = Some(MAX_POOL_SIZE);
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
    options.connect_timeout = Some(CONNECT_TIMEOUT);
    options.retry_writes = Some(true);
    options.write_concern = Some(WriteConcern::majority());
    options.sdam_event_handler = Some(EventHandler::callback(log_connection_event));

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    Ok(client)
}

/// Resolve the application database from the connection string, falling
/// back to [`DEFAULT_DB_NAME`] when the URI does not name one.
pub fn database(client: &Client) -> Db {
    client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DB_NAME))
}

/// Passive connection-state observers. Each arm purely logs.
fn log_connection_event(event: SdamEvent) {
    match event {
        SdamEvent::ServerOpening(e) => {
            info!("[DB] Connected to server at {}", e.address);
        }
        SdamEvent::ServerHeartbeatFailed(e) => {
            error!("[DB] Connection error on {}: {}", e.server_address, e.failure);
        }
        SdamEvent::ServerClosed(e) => {
            warn!("[DB] Disconnected from server at {}", e.address);
        }
        _ => {}
    }
}

// region: --- Connect error classification

/// Diagnostic hint derived from an initial-connection failure.
///
/// The hint is logged next to the raw driver error so an operator can tell
/// at a glance whether credentials, the network, or a timeout is the likely
/// culprit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectErrorHint {
    Authentication,
    Network,
    Timeout,
    Unknown,
}

impl ConnectErrorHint {
    /// Classify a driver error, preferring its typed kind and falling back
    /// to message inspection.
    pub fn from_error(err: &mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match err.kind.as_ref() {
            ErrorKind::Authentication { .. } => Self::Authentication,
            ErrorKind::Io(_) => Self::Network,
            ErrorKind::ServerSelection { .. } => Self::Timeout,
            _ => Self::from_message(&err.to_string()),
        }
    }

    /// Classify a failure from its message alone.
    pub fn from_message(message: &str) -> Self {
        let message = message.to_lowercase();

        if message.contains("authentication") || message.contains("scram") {
            Self::Authentication
        } else if message.contains("timed out") || message.contains("timeout") {
            Self::Timeout
        } else if message.contains("connection refused")
            || message.contains("dns")
            || message.contains("network")
            || message.contains("io error")
        {
            Self::Network
        } else {
            Self::Unknown
        }
    }
}

impl std::fmt::Display for ConnectErrorHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hint = match self {
            Self::Authentication => "check the username and password in the connection string",
            Self::Network => "check that the database host is reachable",
            Self::Timeout => "the server did not respond within the selection timeout",
            Self::Unknown => "unrecognized connection failure",
        };
        write!(f, "{hint}")
    }
}

// endregion: --- Connect error classification
