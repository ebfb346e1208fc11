//! # Job Tracker
//!
//! A job application tracking API implemented in Rust.
//!
//! This is the application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Storage backend (PostgreSQL or seeded in-memory store)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use job_tracker::config::Settings;
use job_tracker::presentation::http::handlers::health::init_server_start;
use job_tracker::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first so the log format can follow the environment
    let settings = Settings::load()?;

    job_tracker::telemetry::init_tracing(&settings.environment);
    init_server_start();

    info!("Starting Job Tracker...");
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        backend = ?settings.storage_backend(),
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    info!("Server stopped");
    Ok(())
}
