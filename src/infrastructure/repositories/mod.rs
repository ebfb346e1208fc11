//! Repository Implementations
//!
//! Implementations of the domain repository traits, one PostgreSQL and one
//! in-memory variant per entity. Which set is used is decided once at
//! startup from `storage.use_mock_data`.
//!
//! ## Available Repositories
//!
//! - **JobApplicationRepository** - Job application CRUD with soft delete
//! - **CompanyRepository** - Company lookup-or-create
//! - **PlatformRepository** - Platform lookup-or-create
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::infrastructure::memory::InMemoryStore;
//! use crate::infrastructure::repositories::{
//!     InMemoryJobApplicationRepository, PgJobApplicationRepository,
//! };
//!
//! let store = Arc::new(InMemoryStore::default());
//! let mock_repo = InMemoryJobApplicationRepository::new(store);
//! let pg_repo = PgJobApplicationRepository::new(pool);
//! ```

pub mod company_repository;
pub mod job_application_repository;
pub mod platform_repository;

pub use company_repository::{InMemoryCompanyRepository, PgCompanyRepository};
pub use job_application_repository::{InMemoryJobApplicationRepository, PgJobApplicationRepository};
pub use platform_repository::{InMemoryPlatformRepository, PgPlatformRepository};
