//! Sample records loaded into a fresh in-memory store.

use chrono::{Duration, Utc};

use super::InMemoryStore;
use crate::domain::{ApplicationStatus, Company, JobApplication, Platform};

/// Identifiers of the visible seeded job applications.
pub const SEED_JOB_APPLICATION_IDS: [&str; 4] = ["ja-001", "ja-002", "ja-003", "ja-004"];

/// Identifier of the seeded soft-deleted job application.
pub const SEED_DELETED_ID: &str = "ja-deleted-001";

const COMPANIES: [(&str, &str, &str, &str); 5] = [
    ("company-001", "Microsoft", "Software", "https://careers.microsoft.com"),
    ("company-002", "Google", "Internet", "https://careers.google.com"),
    ("company-003", "Amazon", "E-commerce", "https://www.amazon.jobs"),
    ("company-004", "Netflix", "Entertainment", "https://jobs.netflix.com"),
    ("company-005", "Meta", "Social Media", "https://www.metacareers.com"),
];

const PLATFORMS: [(&str, &str, &str, bool); 4] = [
    ("platform-001", "LinkedIn", "https://www.linkedin.com/jobs", true),
    ("platform-002", "Indeed", "https://www.indeed.com", true),
    ("platform-003", "Company Website", "", true),
    ("platform-004", "Glassdoor", "https://www.glassdoor.com", false),
];

// (id, company, platform, title, status, notes, created days ago, updated days ago, deleted)
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    ApplicationStatus,
    Option<&'static str>,
    i64,
    i64,
    bool,
);

const JOB_APPLICATIONS: [SeedRow; 5] = [
    (
        "ja-001",
        "company-001",
        "platform-001",
        "Senior Software Engineer",
        ApplicationStatus::InterviewScheduled,
        Some("Technical interview with the Azure team"),
        10,
        2,
        false,
    ),
    (
        "ja-002",
        "company-002",
        "platform-003",
        "Software Engineer II",
        ApplicationStatus::Applied,
        None,
        7,
        7,
        false,
    ),
    (
        "ja-003",
        "company-003",
        "platform-002",
        "Backend Developer",
        ApplicationStatus::Rejected,
        Some("Position filled internally"),
        20,
        12,
        false,
    ),
    (
        "ja-004",
        "company-004",
        "platform-001",
        "Platform Engineer",
        ApplicationStatus::UnderReview,
        Some("Referred by a former colleague"),
        3,
        1,
        false,
    ),
    (
        SEED_DELETED_ID,
        "company-005",
        "platform-002",
        "Frontend Developer",
        ApplicationStatus::Withdrawn,
        Some("Duplicate entry"),
        30,
        25,
        true,
    ),
];

pub(super) fn populate(store: &InMemoryStore) {
    let now = Utc::now();
    let created = now - Duration::days(60);

    for (id, name, industry, website) in COMPANIES {
        let mut company = Company::named(id, name);
        company.industry = Some(industry.to_string());
        company.website = Some(website.to_string());
        company.created_at = created;
        company.updated_at = created;
        store.companies.insert(id.to_string(), company);
    }

    for (id, name, url, is_active) in PLATFORMS {
        let mut platform = Platform::named(id, name);
        platform.url = (!url.is_empty()).then(|| url.to_string());
        platform.is_active = is_active;
        platform.created_at = created;
        platform.updated_at = created;
        store.platforms.insert(id.to_string(), platform);
    }

    for (id, company_id, platform_id, title, status, notes, created_days, updated_days, deleted) in
        JOB_APPLICATIONS
    {
        let company_name = store
            .companies
            .get(company_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let platform_name = store
            .platforms
            .get(platform_id)
            .map(|p| p.name.clone())
            .unwrap_or_default();

        let application = JobApplication {
            id: id.to_string(),
            company_id: company_id.to_string(),
            company_name,
            job_title: title.to_string(),
            platform_id: platform_id.to_string(),
            platform_name,
            status,
            notes: notes.map(str::to_string),
            is_deleted: deleted,
            created_at: now - Duration::days(created_days),
            updated_at: now - Duration::days(updated_days),
        };
        store.job_applications.insert(id.to_string(), application);
    }
}
