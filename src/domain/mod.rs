//! # Domain Layer
//!
//! The domain layer contains the core records of the job tracker.
//! It is independent of any storage backend or HTTP concerns.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities encapsulate their own invariants (visibility, timestamps)

pub mod entities;

pub use entities::*;
