//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/jobapplications", job_application_routes())
        .nest("/companies", company_routes())
        .nest("/platforms", platform_routes())
}

/// Company routes
fn company_routes() -> Router<AppState> {
    use handlers::lookup;

    Router::new()
        .route("/", get(lookup::list_companies))
        .route("/{id}", get(lookup::get_company).delete(lookup::delete_company))
}

/// Platform routes
fn platform_routes() -> Router<AppState> {
    use handlers::lookup;

    Router::new()
        .route("/", get(lookup::list_platforms))
        .route("/{id}", get(lookup::get_platform).delete(lookup::delete_platform))
}

/// Job application routes
fn job_application_routes() -> Router<AppState> {
    use handlers::job_application as ja;

    Router::new()
        .route(
            "/",
            get(ja::list_job_applications).post(ja::create_job_application),
        )
        .route(
            "/{id}",
            get(ja::get_job_application)
                .head(ja::head_job_application)
                .put(ja::update_job_application)
                .delete(ja::delete_job_application),
        )
}
