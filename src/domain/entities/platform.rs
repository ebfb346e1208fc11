//! Platform entity and repository trait.
//!
//! Maps to the `platforms` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A job board or channel an application was submitted through.
///
/// Maps to the `platforms` table:
/// - id: TEXT PRIMARY KEY
/// - name: VARCHAR(50) NOT NULL, unique on LOWER(name)
/// - url: TEXT NULL
/// - is_active: BOOLEAN NOT NULL DEFAULT TRUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: String,

    /// Platform name (1-50 characters, unique ignoring case)
    pub name: String,

    pub url: Option<String>,

    /// Whether the platform is still offered for new applications
    pub is_active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Platform {
    /// Create an active platform with only a name set.
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            url: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive name comparison, folding the same way as `LOWER(name)`.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// Repository trait for Platform data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlatformRepository: Send + Sync {
    /// All platforms ordered by name.
    async fn get_all(&self) -> Result<Vec<Platform>, AppError>;

    /// Find a platform by its identifier.
    async fn get_by_id(&self, id: &str) -> Result<Option<Platform>, AppError>;

    /// Find a platform by name, ignoring case.
    async fn find_by_name(&self, name: &str) -> Result<Option<Platform>, AppError>;

    /// Return the platform with this name, creating it if needed.
    async fn get_or_create(&self, name: &str) -> Result<Platform, AppError>;

    /// Hard-delete a platform.
    ///
    /// Fails with `AppError::Conflict` while any job application still
    /// references it. Returns whether a platform was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
