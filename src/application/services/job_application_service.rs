//! Job Application Service
//!
//! Validates requests, resolves company and platform references, and maps
//! repository outcomes onto service errors.

use std::sync::Arc;

use async_trait::async_trait;
use validator::{Validate, ValidationErrors};

use crate::application::dto::{
    CreateJobApplicationRequest, JobApplicationResponse, UpdateJobApplicationRequest,
};
use crate::domain::{
    CompanyRepository, JobApplication, JobApplicationRepository, PlatformRepository,
};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Job application service trait
#[async_trait]
pub trait JobApplicationService: Send + Sync {
    /// List all visible job applications, newest first
    async fn list(&self) -> Result<Vec<JobApplicationResponse>, JobApplicationError>;

    /// Get a job application by ID
    async fn get(&self, id: &str) -> Result<JobApplicationResponse, JobApplicationError>;

    /// Whether a visible job application exists
    async fn exists(&self, id: &str) -> Result<bool, JobApplicationError>;

    /// Create a job application
    async fn create(
        &self,
        request: CreateJobApplicationRequest,
    ) -> Result<JobApplicationResponse, JobApplicationError>;

    /// Replace the mutable fields of a job application
    async fn update(
        &self,
        id: &str,
        request: UpdateJobApplicationRequest,
    ) -> Result<JobApplicationResponse, JobApplicationError>;

    /// Soft-delete a job application
    async fn delete(&self, id: &str) -> Result<(), JobApplicationError>;
}

/// Job application service errors
#[derive(Debug, thiserror::Error)]
pub enum JobApplicationError {
    #[error("Job application id must not be blank")]
    InvalidId,

    #[error("Job application {0} not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl JobApplicationError {
    /// Metric label for a failed mutation
    fn outcome(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidId | Self::Validation(_) | Self::InvalidInput(_) => "invalid",
            Self::Conflict(_) => "conflict",
            Self::Internal(_) => "error",
        }
    }
}

impl From<JobApplicationError> for AppError {
    fn from(error: JobApplicationError) -> Self {
        match error {
            JobApplicationError::InvalidId => AppError::BadRequest(error.to_string()),
            JobApplicationError::NotFound(_) => AppError::NotFound(error.to_string()),
            JobApplicationError::Validation(errors) => validation_error(errors),
            JobApplicationError::InvalidInput(message) => AppError::validation(message),
            JobApplicationError::Conflict(message) => AppError::Conflict(message),
            JobApplicationError::Internal(message) => AppError::Internal(message),
        }
    }
}

/// Translate a repository error for the record `id`.
///
/// Unexpected failures are logged here with full detail; callers only see
/// an opaque internal error.
fn repository_error<'a>(
    operation: &'static str,
    id: &'a str,
) -> impl FnOnce(AppError) -> JobApplicationError + 'a {
    move |error| match error {
        AppError::NotFound(_) => JobApplicationError::NotFound(id.to_string()),
        AppError::Validation { message, .. } | AppError::BadRequest(message) => {
            JobApplicationError::InvalidInput(message)
        }
        AppError::Conflict(message) => JobApplicationError::Conflict(message),
        other => {
            tracing::error!(operation, id, error = %other, "Job application repository failure");
            JobApplicationError::Internal(other.to_string())
        }
    }
}

fn ensure_id(id: &str) -> Result<&str, JobApplicationError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(JobApplicationError::InvalidId);
    }
    Ok(id)
}

fn record<T>(operation: &str, result: &Result<T, JobApplicationError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    metrics::record_mutation(operation, outcome);
}

/// JobApplicationService implementation
pub struct JobApplicationServiceImpl<J, C, P>
where
    J: JobApplicationRepository,
    C: CompanyRepository,
    P: PlatformRepository,
{
    job_application_repo: Arc<J>,
    company_repo: Arc<C>,
    platform_repo: Arc<P>,
}

impl<J, C, P> JobApplicationServiceImpl<J, C, P>
where
    J: JobApplicationRepository,
    C: CompanyRepository,
    P: PlatformRepository,
{
    pub fn new(job_application_repo: Arc<J>, company_repo: Arc<C>, platform_repo: Arc<P>) -> Self {
        Self {
            job_application_repo,
            company_repo,
            platform_repo,
        }
    }

    async fn create_inner(
        &self,
        request: CreateJobApplicationRequest,
    ) -> Result<JobApplicationResponse, JobApplicationError> {
        request.validate()?;

        let company = self
            .company_repo
            .get_or_create(&request.company)
            .await
            .map_err(repository_error("resolve_company", ""))?;
        let platform = self
            .platform_repo
            .get_or_create(&request.platform)
            .await
            .map_err(repository_error("resolve_platform", ""))?;

        let application = JobApplication {
            company_id: company.id,
            company_name: company.name,
            job_title: request.job_title,
            platform_id: platform.id,
            platform_name: platform.name,
            status: request.status,
            notes: request.notes,
            ..Default::default()
        };

        let created = self
            .job_application_repo
            .create(&application)
            .await
            .map_err(repository_error("create", ""))?;

        tracing::info!(id = %created.id, company = %created.company_name, "Job application created");
        Ok(JobApplicationResponse::from(created))
    }

    async fn update_inner(
        &self,
        id: &str,
        request: UpdateJobApplicationRequest,
    ) -> Result<JobApplicationResponse, JobApplicationError> {
        let id = ensure_id(id)?;
        request.validate()?;

        let mut application = self
            .job_application_repo
            .get_by_id(id)
            .await
            .map_err(repository_error("update", id))?
            .ok_or_else(|| JobApplicationError::NotFound(id.to_string()))?;

        application.job_title = request.job_title;
        application.status = request.status;
        application.notes = request.notes;

        // A concurrent delete between the read and the write surfaces as NotFound
        let updated = self
            .job_application_repo
            .update(&application)
            .await
            .map_err(repository_error("update", id))?;

        tracing::info!(id = %updated.id, status = %updated.status, "Job application updated");
        Ok(JobApplicationResponse::from(updated))
    }

    async fn delete_inner(&self, id: &str) -> Result<(), JobApplicationError> {
        let id = ensure_id(id)?;

        let deleted = self
            .job_application_repo
            .delete(id)
            .await
            .map_err(repository_error("delete", id))?;

        if !deleted {
            return Err(JobApplicationError::NotFound(id.to_string()));
        }

        tracing::info!(id, "Job application deleted");
        Ok(())
    }
}

#[async_trait]
impl<J, C, P> JobApplicationService for JobApplicationServiceImpl<J, C, P>
where
    J: JobApplicationRepository + 'static,
    C: CompanyRepository + 'static,
    P: PlatformRepository + 'static,
{
    async fn list(&self) -> Result<Vec<JobApplicationResponse>, JobApplicationError> {
        let applications = self
            .job_application_repo
            .get_all()
            .await
            .map_err(repository_error("list", ""))?;

        Ok(applications
            .into_iter()
            .map(JobApplicationResponse::from)
            .collect())
    }

    async fn get(&self, id: &str) -> Result<JobApplicationResponse, JobApplicationError> {
        let id = ensure_id(id)?;

        let application = self
            .job_application_repo
            .get_by_id(id)
            .await
            .map_err(repository_error("get", id))?
            .ok_or_else(|| JobApplicationError::NotFound(id.to_string()))?;

        Ok(JobApplicationResponse::from(application))
    }

    async fn exists(&self, id: &str) -> Result<bool, JobApplicationError> {
        let id = ensure_id(id)?;

        self.job_application_repo
            .exists(id)
            .await
            .map_err(repository_error("exists", id))
    }

    async fn create(
        &self,
        request: CreateJobApplicationRequest,
    ) -> Result<JobApplicationResponse, JobApplicationError> {
        let result = self.create_inner(request).await;
        record("create", &result);
        result
    }

    async fn update(
        &self,
        id: &str,
        request: UpdateJobApplicationRequest,
    ) -> Result<JobApplicationResponse, JobApplicationError> {
        let result = self.update_inner(id, request).await;
        record("update", &result);
        result
    }

    async fn delete(&self, id: &str) -> Result<(), JobApplicationError> {
        let result = self.delete_inner(id).await;
        record("delete", &result);
        result
    }
}
