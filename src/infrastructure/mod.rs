//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database connection pool (PostgreSQL)
//! - In-memory mock store
//! - Repository implementations for both backends
//! - Prometheus metrics

pub mod database;
pub mod memory;
pub mod metrics;
pub mod repositories;
