//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    JobApplicationService, JobApplicationServiceImpl, LookupService, LookupServiceImpl,
};
use crate::config::{Settings, StorageBackend};
use crate::infrastructure::database;
use crate::infrastructure::memory::InMemoryStore;
use crate::infrastructure::repositories::{
    InMemoryCompanyRepository, InMemoryJobApplicationRepository, InMemoryPlatformRepository,
    PgCompanyRepository, PgJobApplicationRepository, PgPlatformRepository,
};
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_catch_panic_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub job_applications: Arc<dyn JobApplicationService>,
    pub lookups: Arc<dyn LookupService>,
    /// Present only when running on PostgreSQL
    pub db: Option<PgPool>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by an in-memory store
    pub fn in_memory(store: Arc<InMemoryStore>, settings: Settings) -> Self {
        let job_application_repo = Arc::new(InMemoryJobApplicationRepository::new(store.clone()));
        let company_repo = Arc::new(InMemoryCompanyRepository::new(store.clone()));
        let platform_repo = Arc::new(InMemoryPlatformRepository::new(store));

        Self {
            job_applications: Arc::new(JobApplicationServiceImpl::new(
                job_application_repo,
                company_repo.clone(),
                platform_repo.clone(),
            )),
            lookups: Arc::new(LookupServiceImpl::new(company_repo, platform_repo)),
            db: None,
            settings: Arc::new(settings),
        }
    }

    /// State backed by a PostgreSQL pool
    pub fn postgres(pool: PgPool, settings: Settings) -> Self {
        let job_application_repo = Arc::new(PgJobApplicationRepository::new(pool.clone()));
        let company_repo = Arc::new(PgCompanyRepository::new(pool.clone()));
        let platform_repo = Arc::new(PgPlatformRepository::new(pool.clone()));

        Self {
            job_applications: Arc::new(JobApplicationServiceImpl::new(
                job_application_repo,
                company_repo.clone(),
                platform_repo.clone(),
            )),
            lookups: Arc::new(LookupServiceImpl::new(company_repo, platform_repo)),
            db: Some(pool),
            settings: Arc::new(settings),
        }
    }

    /// Build the state for the configured storage backend
    pub async fn from_settings(settings: &Settings) -> Result<Self> {
        match settings.storage_backend() {
            StorageBackend::InMemory => {
                let store = Arc::new(InMemoryStore::seeded(
                    settings.storage.simulated_latency(),
                ));
                tracing::info!("Using seeded in-memory storage");
                Ok(Self::in_memory(store, settings.clone()))
            }
            StorageBackend::Postgres => {
                let pool = database::create_pool(&settings.database).await?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&pool).await?;
                    tracing::info!("Database migrations applied");
                }

                Ok(Self::postgres(pool, settings.clone()))
            }
        }
    }
}

/// Build the router with the full middleware stack
pub fn build_router(state: AppState) -> Router {
    routes::create_router(state)
        .layer(create_catch_panic_layer())
        .layer(create_trace_layer())
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = AppState::from_settings(&settings).await?;
        let router = build_router(state);

        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
