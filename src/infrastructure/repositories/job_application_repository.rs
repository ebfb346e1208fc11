//! Job Application Repository Implementations
//!
//! PostgreSQL and in-memory implementations of the JobApplicationRepository
//! trait. Both apply the soft-delete visibility rule through a single
//! predicate: `VISIBLE` for SQL, `JobApplication::is_visible` in memory.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{ApplicationStatus, JobApplication, JobApplicationRepository};
use crate::infrastructure::memory::InMemoryStore;
use crate::shared::error::AppError;

/// Visibility filter applied by every PostgreSQL read and mutation.
const VISIBLE: &str = "ja.is_deleted = FALSE";

/// Strictly increasing modification timestamp.
const TOUCH: &str = "GREATEST(NOW(), ja.updated_at + INTERVAL '1 microsecond')";

/// Select job application rows joined with their company and platform names.
///
/// `source` is the relation aliased as `ja`: the table itself or a CTE.
fn select_from(source: &str) -> String {
    format!(
        r#"
        SELECT ja.id, ja.company_id, c.name AS company_name, ja.job_title,
               ja.platform_id, p.name AS platform_name, ja.status, ja.notes,
               ja.is_deleted, ja.created_at, ja.updated_at
        FROM {source} ja
        JOIN companies c ON c.id = ja.company_id
        JOIN platforms p ON p.id = ja.platform_id
        "#
    )
}

/// Database row representation of the joined query.
#[derive(Debug, sqlx::FromRow)]
struct JobApplicationRow {
    id: String,
    company_id: String,
    company_name: String,
    job_title: String,
    platform_id: String,
    platform_name: String,
    status: i16,
    notes: Option<String>,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl JobApplicationRow {
    /// Convert database row to domain entity.
    fn into_job_application(self) -> Result<JobApplication, AppError> {
        Ok(JobApplication {
            id: self.id,
            company_id: self.company_id,
            company_name: self.company_name,
            job_title: self.job_title,
            platform_id: self.platform_id,
            platform_name: self.platform_name,
            status: ApplicationStatus::try_from(self.status)?,
            notes: self.notes,
            is_deleted: self.is_deleted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn map_write_error(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::validation("Referenced company or platform does not exist")
        }
        _ => AppError::Database(e),
    }
}

/// PostgreSQL job application repository.
#[derive(Clone)]
pub struct PgJobApplicationRepository {
    pool: PgPool,
}

impl PgJobApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobApplicationRepository for PgJobApplicationRepository {
    async fn get_all(&self) -> Result<Vec<JobApplication>, AppError> {
        let sql = format!(
            "{} WHERE {VISIBLE} ORDER BY ja.created_at DESC, ja.id",
            select_from("job_applications")
        );
        let rows = sqlx::query_as::<_, JobApplicationRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(JobApplicationRow::into_job_application)
            .collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<JobApplication>, AppError> {
        let sql = format!(
            "{} WHERE ja.id = $1 AND {VISIBLE}",
            select_from("job_applications")
        );
        let row = sqlx::query_as::<_, JobApplicationRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(JobApplicationRow::into_job_application).transpose()
    }

    async fn create(&self, application: &JobApplication) -> Result<JobApplication, AppError> {
        application.check_required()?;

        let sql = format!(
            r#"
            WITH written AS (
                INSERT INTO job_applications (id, company_id, platform_id, job_title, status, notes)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
            )
            {}
            "#,
            select_from("written")
        );
        let row = sqlx::query_as::<_, JobApplicationRow>(&sql)
            .bind(Uuid::new_v4().to_string())
            .bind(&application.company_id)
            .bind(&application.platform_id)
            .bind(&application.job_title)
            .bind(application.status.ordinal())
            .bind(&application.notes)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;

        row.into_job_application()
    }

    async fn update(&self, application: &JobApplication) -> Result<JobApplication, AppError> {
        application.check_required()?;

        let sql = format!(
            r#"
            WITH written AS (
                UPDATE job_applications AS ja
                SET company_id = $2,
                    platform_id = $3,
                    job_title = $4,
                    status = $5,
                    notes = $6,
                    updated_at = {TOUCH}
                WHERE ja.id = $1 AND {VISIBLE}
                RETURNING ja.*
            )
            {}
            "#,
            select_from("written")
        );
        let row = sqlx::query_as::<_, JobApplicationRow>(&sql)
            .bind(&application.id)
            .bind(&application.company_id)
            .bind(&application.platform_id)
            .bind(&application.job_title)
            .bind(application.status.ordinal())
            .bind(&application.notes)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?
            .ok_or_else(|| {
                AppError::NotFound(format!("Job application with id {} not found", application.id))
            })?;

        row.into_job_application()
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let sql = format!(
            "UPDATE job_applications AS ja SET is_deleted = TRUE, updated_at = {TOUCH} \
             WHERE ja.id = $1 AND {VISIBLE}"
        );
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: &str) -> Result<bool, AppError> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM job_applications ja WHERE ja.id = $1 AND {VISIBLE})"
        );
        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}

/// In-memory job application repository backed by a shared `InMemoryStore`.
#[derive(Clone)]
pub struct InMemoryJobApplicationRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryJobApplicationRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    fn insert_new(&self, application: &JobApplication) -> Result<JobApplication, AppError> {
        let _guard = self.store.exclusive();
        self.check_references(application)?;

        let mut id = Uuid::new_v4().to_string();
        while self.store.job_applications.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        let now = Utc::now();
        let record = JobApplication {
            id,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            ..application.clone()
        };
        self.store
            .job_applications
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn overwrite(&self, application: &JobApplication) -> Result<Option<JobApplication>, AppError> {
        let _guard = self.store.exclusive();

        let Some(mut entry) = self
            .store
            .job_applications
            .get_mut(&application.id)
            .filter(|entry| entry.is_visible())
        else {
            return Ok(None);
        };
        self.check_references(application)?;

        entry.apply(application);
        Ok(Some(entry.value().clone()))
    }

    /// Mirror the foreign keys of the relational schema.
    fn check_references(&self, application: &JobApplication) -> Result<(), AppError> {
        if self.store.companies.contains_key(&application.company_id)
            && self.store.platforms.contains_key(&application.platform_id)
        {
            Ok(())
        } else {
            Err(AppError::validation(
                "Referenced company or platform does not exist",
            ))
        }
    }

    fn soft_delete(&self, id: &str) -> bool {
        let _guard = self.store.exclusive();

        match self
            .store
            .job_applications
            .get_mut(id)
            .filter(|entry| entry.is_visible())
        {
            Some(mut entry) => {
                entry.mark_deleted();
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl JobApplicationRepository for InMemoryJobApplicationRepository {
    async fn get_all(&self) -> Result<Vec<JobApplication>, AppError> {
        self.store.simulate_latency().await;
        Ok(self.store.visible_job_applications())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<JobApplication>, AppError> {
        self.store.simulate_latency().await;
        Ok(self.store.visible_job_application(id))
    }

    async fn create(&self, application: &JobApplication) -> Result<JobApplication, AppError> {
        application.check_required()?;
        self.store.simulate_latency().await;

        let record = self.insert_new(application)?;
        tracing::debug!(id = %record.id, "Job application stored");
        Ok(record)
    }

    async fn update(&self, application: &JobApplication) -> Result<JobApplication, AppError> {
        application.check_required()?;
        self.store.simulate_latency().await;

        self.overwrite(application)?.ok_or_else(|| {
            AppError::NotFound(format!("Job application with id {} not found", application.id))
        })
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.store.simulate_latency().await;
        Ok(self.soft_delete(id))
    }

    async fn exists(&self, id: &str) -> Result<bool, AppError> {
        self.store.simulate_latency().await;
        Ok(self.store.visible_job_application(id).is_some())
    }
}
