//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::{ApplicationStatus, Company, JobApplication, Platform};

/// Job application response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationResponse {
    pub id: String,
    pub company: String,
    pub job_title: String,
    pub platform: String,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<JobApplication> for JobApplicationResponse {
    fn from(application: JobApplication) -> Self {
        Self {
            id: application.id,
            company: application.company_name,
            job_title: application.job_title,
            platform: application.platform_name,
            status: application.status,
            notes: application.notes,
            created_at: application.created_at.to_rfc3339(),
            updated_at: application.updated_at.to_rfc3339(),
        }
    }
}

/// Company response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            description: company.description,
            website: company.website,
            industry: company.industry,
        }
    }
}

/// Platform response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub is_active: bool,
}

impl From<Platform> for PlatformResponse {
    fn from(platform: Platform) -> Self {
        Self {
            id: platform.id,
            name: platform.name,
            url: platform.url,
            is_active: platform.is_active,
        }
    }
}
