//! # Job Tracker Library
//!
//! This crate provides a job application tracking service with:
//! - RESTful HTTP API for job applications, companies and platforms
//! - Soft delete with a single visibility rule across storage backends
//! - PostgreSQL or a seeded in-memory store, selected at startup
//! - Prometheus metrics and health probes
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities and repository traits
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: Database, in-memory store and metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! job_tracker/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities and repository traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ PostgreSQL and in-memory implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
