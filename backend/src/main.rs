//! # Backend Service
//!
//! Thin entry point that delegates to lib-web for server setup.
//!
//! Termination policy lives here: a startup failure (unreachable database,
//! bad configuration) or a serve error exits 1; a clean interrupt-driven
//! shutdown exits 0.

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    if let Err(err) = lib_web::start_server().await {
        tracing::error!("[FATAL] Server terminated: {err:#}");
        std::process::exit(1);
    }
}
