//! Lookup Service
//!
//! Read access to the company and platform reference data.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{CompanyResponse, PlatformResponse};
use crate::domain::{CompanyRepository, PlatformRepository};
use crate::shared::error::AppError;

/// Lookup service trait
#[async_trait]
pub trait LookupService: Send + Sync {
    /// All known companies, ordered by name
    async fn list_companies(&self) -> Result<Vec<CompanyResponse>, AppError>;

    /// Company whose name matches ignoring case
    async fn find_company(&self, name: &str) -> Result<Option<CompanyResponse>, AppError>;

    async fn get_company(&self, id: &str) -> Result<CompanyResponse, AppError>;

    /// Remove a company no job application references
    async fn delete_company(&self, id: &str) -> Result<(), AppError>;

    /// All known platforms, ordered by name
    async fn list_platforms(&self) -> Result<Vec<PlatformResponse>, AppError>;

    /// Platform whose name matches ignoring case
    async fn find_platform(&self, name: &str) -> Result<Option<PlatformResponse>, AppError>;

    async fn get_platform(&self, id: &str) -> Result<PlatformResponse, AppError>;

    /// Remove a platform no job application references
    async fn delete_platform(&self, id: &str) -> Result<(), AppError>;
}

fn ensure_id<'a>(kind: &str, id: &'a str) -> Result<&'a str, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest(format!("{} id must not be blank", kind)));
    }
    Ok(id)
}

/// LookupService implementation
pub struct LookupServiceImpl<C, P>
where
    C: CompanyRepository,
    P: PlatformRepository,
{
    company_repo: Arc<C>,
    platform_repo: Arc<P>,
}

impl<C, P> LookupServiceImpl<C, P>
where
    C: CompanyRepository,
    P: PlatformRepository,
{
    pub fn new(company_repo: Arc<C>, platform_repo: Arc<P>) -> Self {
        Self {
            company_repo,
            platform_repo,
        }
    }
}

#[async_trait]
impl<C, P> LookupService for LookupServiceImpl<C, P>
where
    C: CompanyRepository + 'static,
    P: PlatformRepository + 'static,
{
    async fn list_companies(&self) -> Result<Vec<CompanyResponse>, AppError> {
        let companies = self.company_repo.get_all().await?;
        Ok(companies.into_iter().map(CompanyResponse::from).collect())
    }

    async fn find_company(&self, name: &str) -> Result<Option<CompanyResponse>, AppError> {
        let company = self.company_repo.find_by_name(name).await?;
        Ok(company.map(CompanyResponse::from))
    }

    async fn get_company(&self, id: &str) -> Result<CompanyResponse, AppError> {
        let id = ensure_id("Company", id)?;

        self.company_repo
            .get_by_id(id)
            .await?
            .map(CompanyResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("Company {} not found", id)))
    }

    async fn delete_company(&self, id: &str) -> Result<(), AppError> {
        let id = ensure_id("Company", id)?;

        if !self.company_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Company {} not found", id)));
        }
        tracing::info!(id, "Company deleted");
        Ok(())
    }

    async fn list_platforms(&self) -> Result<Vec<PlatformResponse>, AppError> {
        let platforms = self.platform_repo.get_all().await?;
        Ok(platforms.into_iter().map(PlatformResponse::from).collect())
    }

    async fn find_platform(&self, name: &str) -> Result<Option<PlatformResponse>, AppError> {
        let platform = self.platform_repo.find_by_name(name).await?;
        Ok(platform.map(PlatformResponse::from))
    }

    async fn get_platform(&self, id: &str) -> Result<PlatformResponse, AppError> {
        let id = ensure_id("Platform", id)?;

        self.platform_repo
            .get_by_id(id)
            .await?
            .map(PlatformResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("Platform {} not found", id)))
    }

    async fn delete_platform(&self, id: &str) -> Result<(), AppError> {
        let id = ensure_id("Platform", id)?;

        if !self.platform_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Platform {} not found", id)));
        }
        tracing::info!(id, "Platform deleted");
        Ok(())
    }
}
