//! In-Memory Store
//!
//! Concurrent maps holding job applications, companies and platforms for
//! the mock storage backend.
//!
//! Readers go straight to the `DashMap`s. Every mutate-then-publish
//! sequence runs inside the store's exclusive region (`write_lock`), so a
//! read-then-write in one mutator can never interleave with another.
//! Each repository call first awaits the configured artificial latency,
//! never while holding the exclusive region.

mod seed;

use std::time::Duration;

use dashmap::DashMap;
use parking_lot::{Mutex, MutexGuard};

use crate::domain::{Company, JobApplication, Platform};

pub use seed::{SEED_DELETED_ID, SEED_JOB_APPLICATION_IDS};

/// Owned in-memory store shared by the in-memory repositories.
pub struct InMemoryStore {
    pub(crate) job_applications: DashMap<String, JobApplication>,
    pub(crate) companies: DashMap<String, Company>,
    pub(crate) platforms: DashMap<String, Platform>,
    write_lock: Mutex<()>,
    latency: Duration,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new(latency: Duration) -> Self {
        Self {
            job_applications: DashMap::new(),
            companies: DashMap::new(),
            platforms: DashMap::new(),
            write_lock: Mutex::new(()),
            latency,
        }
    }

    /// Create a store populated with the sample records.
    pub fn seeded(latency: Duration) -> Self {
        let store = Self::new(latency);
        seed::populate(&store);
        tracing::debug!(
            job_applications = store.job_applications.len(),
            companies = store.companies.len(),
            platforms = store.platforms.len(),
            "In-memory store seeded"
        );
        store
    }

    /// Await the configured artificial latency.
    pub(crate) async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Enter the exclusive mutation region.
    pub(crate) fn exclusive(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock()
    }

    /// Snapshot of a job application that passes the visibility predicate.
    pub(crate) fn visible_job_application(&self, id: &str) -> Option<JobApplication> {
        self.job_applications
            .get(id)
            .filter(|entry| entry.is_visible())
            .map(|entry| entry.value().clone())
    }

    /// Snapshots of every visible job application, newest first.
    pub(crate) fn visible_job_applications(&self) -> Vec<JobApplication> {
        let mut applications: Vec<JobApplication> = self
            .job_applications
            .iter()
            .filter(|entry| entry.is_visible())
            .map(|entry| entry.value().clone())
            .collect();
        applications.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        applications
    }

    /// Whether any job application, deleted or not, references the company.
    pub(crate) fn company_in_use(&self, company_id: &str) -> bool {
        self.job_applications
            .iter()
            .any(|entry| entry.company_id == company_id)
    }

    /// Whether any job application, deleted or not, references the platform.
    pub(crate) fn platform_in_use(&self, platform_id: &str) -> bool {
        self.job_applications
            .iter()
            .any(|entry| entry.platform_id == platform_id)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::seeded(Duration::ZERO)
    }
}
