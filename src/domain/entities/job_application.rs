//! Job application entity and repository trait.
//!
//! Maps to the `job_applications` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Status of a job application.
///
/// Ordinals are persisted as `SMALLINT` and must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(i16)]
pub enum ApplicationStatus {
    #[default]
    Applied = 0,
    Rejected = 1,
    InterviewScheduled = 2,
    OfferReceived = 3,
    Withdrawn = 4,
    UnderReview = 5,
}

impl ApplicationStatus {
    /// All statuses in ordinal order.
    pub const ALL: [ApplicationStatus; 6] = [
        Self::Applied,
        Self::Rejected,
        Self::InterviewScheduled,
        Self::OfferReceived,
        Self::Withdrawn,
        Self::UnderReview,
    ];

    /// Ordinal used by the persistent store.
    pub fn ordinal(self) -> i16 {
        self as i16
    }

    /// Name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Rejected => "Rejected",
            Self::InterviewScheduled => "InterviewScheduled",
            Self::OfferReceived => "OfferReceived",
            Self::Withdrawn => "Withdrawn",
            Self::UnderReview => "UnderReview",
        }
    }
}

impl TryFrom<i16> for ApplicationStatus {
    type Error = AppError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.ordinal() == value)
            .ok_or_else(|| AppError::Internal(format!("Unknown application status ordinal {}", value)))
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked job application.
///
/// Maps to the `job_applications` table:
/// - id: TEXT PRIMARY KEY
/// - company_id: TEXT NOT NULL REFERENCES companies(id) ON DELETE RESTRICT
/// - platform_id: TEXT NOT NULL REFERENCES platforms(id) ON DELETE RESTRICT
/// - job_title: VARCHAR(100) NOT NULL
/// - status: SMALLINT NOT NULL DEFAULT 0
/// - notes: VARCHAR(1000) NULL
/// - is_deleted: BOOLEAN NOT NULL DEFAULT FALSE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Company and platform names are denormalized onto the entity so callers
/// never need a second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    /// Server-assigned identifier, immutable after creation
    pub id: String,

    /// Referenced company
    pub company_id: String,

    /// Company name (up to 100 characters)
    pub company_name: String,

    /// Job title (up to 100 characters)
    pub job_title: String,

    /// Referenced platform
    pub platform_id: String,

    /// Platform name (up to 50 characters)
    pub platform_name: String,

    /// Current application status
    #[serde(default)]
    pub status: ApplicationStatus,

    /// Free-form notes (up to 1000 characters)
    pub notes: Option<String>,

    /// Soft-delete flag
    pub is_deleted: bool,

    /// Creation timestamp, immutable after creation
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl JobApplication {
    /// Whether the record takes part in reads.
    ///
    /// Every read path filters through this predicate.
    pub fn is_visible(&self) -> bool {
        !self.is_deleted
    }

    /// Refresh the modification timestamp.
    ///
    /// The new value is strictly greater than the previous one even when
    /// the clock has not advanced.
    pub fn touch(&mut self) {
        let now = Utc::now();
        let floor = self.updated_at + Duration::microseconds(1);
        self.updated_at = if now > floor { now } else { floor };
    }

    /// Soft-delete the record.
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.touch();
    }

    /// Overwrite the mutable fields with those of `changes`.
    ///
    /// Identifier and creation timestamp are left untouched.
    pub fn apply(&mut self, changes: &JobApplication) {
        self.company_id = changes.company_id.clone();
        self.company_name = changes.company_name.clone();
        self.job_title = changes.job_title.clone();
        self.platform_id = changes.platform_id.clone();
        self.platform_name = changes.platform_name.clone();
        self.status = changes.status;
        self.notes = changes.notes.clone();
        self.touch();
    }

    /// Check the fields every stored record must carry.
    pub fn check_required(&self) -> Result<(), AppError> {
        let missing: Vec<&str> = [
            ("company", &self.company_name),
            ("jobTitle", &self.job_title),
            ("platform", &self.platform_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

impl Default for JobApplication {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            company_id: String::new(),
            company_name: String::new(),
            job_title: String::new(),
            platform_id: String::new(),
            platform_name: String::new(),
            status: ApplicationStatus::default(),
            notes: None,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for job application data access.
///
/// Soft-deleted records are invisible to every operation. Absence is
/// reported through `Option`/`bool`, never as an error, except for
/// `update` whose target must exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobApplicationRepository: Send + Sync {
    /// All visible records, newest first.
    async fn get_all(&self) -> Result<Vec<JobApplication>, AppError>;

    /// Find a visible record by identifier.
    async fn get_by_id(&self, id: &str) -> Result<Option<JobApplication>, AppError>;

    /// Store a new record.
    ///
    /// The identifier, both timestamps and the deletion flag are assigned
    /// by the repository; whatever the caller put there is ignored.
    async fn create(&self, application: &JobApplication) -> Result<JobApplication, AppError>;

    /// Overwrite the mutable fields of a visible record.
    ///
    /// Fails with `AppError::NotFound` if the record is absent or deleted.
    async fn update(&self, application: &JobApplication) -> Result<JobApplication, AppError>;

    /// Soft-delete a visible record. Returns whether a record was updated.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Whether a visible record with this identifier exists.
    async fn exists(&self, id: &str) -> Result<bool, AppError>;
}
