//! Company entity and repository trait.
//!
//! Maps to the `companies` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// An employer that job applications are filed with.
///
/// Maps to the `companies` table:
/// - id: TEXT PRIMARY KEY
/// - name: VARCHAR(100) NOT NULL, unique on LOWER(name)
/// - description: TEXT NULL
/// - website: TEXT NULL
/// - industry: VARCHAR(100) NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,

    /// Company name (1-100 characters, unique ignoring case)
    pub name: String,

    pub description: Option<String>,

    pub website: Option<String>,

    pub industry: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Create a company with only a name set.
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            website: None,
            industry: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive name comparison, folding the same way as `LOWER(name)`.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// Repository trait for Company data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// All companies ordered by name.
    async fn get_all(&self) -> Result<Vec<Company>, AppError>;

    /// Find a company by its identifier.
    async fn get_by_id(&self, id: &str) -> Result<Option<Company>, AppError>;

    /// Find a company by name, ignoring case.
    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, AppError>;

    /// Return the company with this name, creating it if needed.
    async fn get_or_create(&self, name: &str) -> Result<Company, AppError>;

    /// Hard-delete a company.
    ///
    /// Fails with `AppError::Conflict` while any job application still
    /// references it. Returns whether a company was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
