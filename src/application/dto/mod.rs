//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{CreateJobApplicationRequest, UpdateJobApplicationRequest};
pub use response::{CompanyResponse, JobApplicationResponse, PlatformResponse};
