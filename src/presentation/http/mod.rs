//! HTTP Surface
//!
//! Routes, handlers and extractors for the REST API.

pub mod extractors;
pub mod handlers;
pub mod routes;
