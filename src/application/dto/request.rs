//! Request DTOs
//!
//! Data structures for API request bodies.
//!
//! Missing string fields deserialize as empty so that they are reported by
//! validation with field-level detail instead of as a parse error.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::ApplicationStatus;

/// Reject values made only of whitespace.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Create job application request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobApplicationRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Company must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub company: String,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Job title must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub job_title: String,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 50, message = "Platform must be 1-50 characters"),
        custom(function = "not_blank")
    )]
    pub platform: String,

    #[serde(default)]
    pub status: ApplicationStatus,

    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

/// Update job application request
///
/// Replaces the mutable fields: an omitted status resets to `Applied` and
/// omitted notes are cleared.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobApplicationRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Job title must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub job_title: String,

    #[serde(default)]
    pub status: ApplicationStatus,

    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}
