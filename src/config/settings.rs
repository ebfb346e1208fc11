//! Application settings and configuration structures.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Storage backend selection
    pub storage: StorageSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Serve from the seeded in-memory store instead of PostgreSQL
    pub use_mock_data: bool,

    /// Artificial delay applied to every in-memory store operation
    pub simulated_latency_ms: u64,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply the bundled schema on startup
    pub run_migrations: bool,
}

/// Which repository implementation the application runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    InMemory,
    Postgres,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if PostgreSQL storage is selected without a database URL.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("storage.use_mock_data", true)?
            .set_default("storage.simulated_latency_ms", 0)?
            .set_default("database.url", "")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__STORAGE__USE_MOCK_DATA=false -> storage.use_mock_data = false
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option(
                "storage.use_mock_data",
                std::env::var("USE_MOCK_DATA").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| settings.validate())
    }

    /// Check cross-field constraints.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.storage_backend() == StorageBackend::Postgres
            && self.database.url.trim().is_empty()
        {
            return Err(ConfigError::Message(
                "database.url (or DATABASE_URL) is required when storage.use_mock_data is false"
                    .into(),
            ));
        }
        Ok(self)
    }

    /// Selected storage backend.
    pub fn storage_backend(&self) -> StorageBackend {
        if self.storage.use_mock_data {
            StorageBackend::InMemory
        } else {
            StorageBackend::Postgres
        }
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Settings for an in-memory instance, used by tests and local runs.
    pub fn in_memory() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".into(),
                port: 0,
            },
            storage: StorageSettings {
                use_mock_data: true,
                simulated_latency_ms: 0,
            },
            database: DatabaseSettings {
                url: String::new(),
                max_connections: 10,
                min_connections: 2,
                acquire_timeout: 30,
                run_migrations: false,
            },
            environment: "test".into(),
        }
    }
}

impl StorageSettings {
    /// Simulated latency as a `Duration`.
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
