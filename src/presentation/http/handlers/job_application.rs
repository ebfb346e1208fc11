//! Job Application Handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::application::dto::{
    CreateJobApplicationRequest, JobApplicationResponse, UpdateJobApplicationRequest,
};
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Base path of the job application resource
pub const JOB_APPLICATIONS_PATH: &str = "/api/jobapplications";

/// List job applications
pub async fn list_job_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobApplicationResponse>>, AppError> {
    let applications = state.job_applications.list().await?;
    Ok(Json(applications))
}

/// Get job application by ID
pub async fn get_job_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobApplicationResponse>, AppError> {
    let application = state.job_applications.get(&id).await?;
    Ok(Json(application))
}

/// Check that a job application exists
pub async fn head_job_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.job_applications.exists(&id).await? {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Create a job application
pub async fn create_job_application(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateJobApplicationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let application = state.job_applications.create(body).await?;
    let location = format!("{}/{}", JOB_APPLICATIONS_PATH, application.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(application),
    ))
}

/// Update a job application
pub async fn update_job_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateJobApplicationRequest>,
) -> Result<Json<JobApplicationResponse>, AppError> {
    let application = state.job_applications.update(&id, body).await?;
    Ok(Json(application))
}

/// Soft-delete a job application
pub async fn delete_job_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.job_applications.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
