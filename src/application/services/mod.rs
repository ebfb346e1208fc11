//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **JobApplicationService**: Job application CRUD with validation
//! - **LookupService**: Company and platform reference data

pub mod job_application_service;
pub mod lookup_service;

pub use job_application_service::{
    JobApplicationError, JobApplicationService, JobApplicationServiceImpl,
};
pub use lookup_service::{LookupService, LookupServiceImpl};
