//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use fake::faker::company::en::CompanyName;
use fake::faker::job::en::Title;
use fake::Fake;
use serde_json::{json, Value};

use job_tracker::config::Settings;
use job_tracker::infrastructure::memory::InMemoryStore;
use job_tracker::startup::{build_router, AppState};

pub const JOB_APPLICATIONS: &str = "/api/jobapplications";

/// Test application running the full router over an in-memory store
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    /// Application over the seeded sample data
    pub fn seeded() -> Self {
        Self::with_store(InMemoryStore::seeded(Duration::ZERO))
    }

    /// Application over an empty store
    pub fn empty() -> Self {
        Self::with_store(InMemoryStore::new(Duration::ZERO))
    }

    fn with_store(store: InMemoryStore) -> Self {
        let state = AppState::in_memory(Arc::new(store), Settings::in_memory());
        let server = TestServer::new(build_router(state)).expect("test server should start");

        Self { server }
    }

    /// Path of a single job application
    pub fn job_application_path(id: &str) -> String {
        format!("{}/{}", JOB_APPLICATIONS, id)
    }
}

/// Random company name
pub fn company_name() -> String {
    CompanyName().fake()
}

/// Random job title
pub fn job_title() -> String {
    Title().fake()
}

/// Valid create payload on a well-known platform
pub fn create_payload() -> Value {
    json!({
        "company": company_name(),
        "jobTitle": job_title(),
        "platform": "LinkedIn",
        "status": "Applied",
        "notes": "Referred by a former colleague"
    })
}
