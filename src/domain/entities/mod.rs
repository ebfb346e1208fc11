//! # Domain Entities
//!
//! Core domain entities of the job tracker.
//! All entities map directly to their corresponding database tables.
//!
//! - **JobApplication**: A tracked application, soft-deleted rather than removed
//! - **Company**: The employer an application was filed with
//! - **Platform**: The job board the application went through
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, once for the
//! in-memory store and once for PostgreSQL.

mod company;
mod job_application;
mod platform;

pub use company::{Company, CompanyRepository};
pub use job_application::{ApplicationStatus, JobApplication, JobApplicationRepository};
pub use platform::{Platform, PlatformRepository};

#[cfg(test)]
pub use company::MockCompanyRepository;
#[cfg(test)]
pub use job_application::MockJobApplicationRepository;
#[cfg(test)]
pub use platform::MockPlatformRepository;
