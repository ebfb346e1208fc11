//! Company Repository Implementations
//!
//! PostgreSQL and in-memory implementations of the CompanyRepository trait.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Company, CompanyRepository};
use crate::infrastructure::memory::InMemoryStore;
use crate::shared::error::AppError;

const COMPANY_COLUMNS: &str = "id, name, description, website, industry, created_at, updated_at";

/// Database row representation of the companies table.
#[derive(Debug, sqlx::FromRow)]
struct CompanyRow {
    id: String,
    name: String,
    description: Option<String>,
    website: Option<String>,
    industry: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            website: row.website,
            industry: row.industry,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn in_use(id: &str) -> AppError {
    AppError::Conflict(format!(
        "Company {} is referenced by job applications and cannot be deleted",
        id
    ))
}

/// PostgreSQL company repository.
#[derive(Clone)]
pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn get_all(&self) -> Result<Vec<Company>, AppError> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies ORDER BY name");
        let rows = sqlx::query_as::<_, CompanyRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Company>, AppError> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1");
        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Company::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, AppError> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE LOWER(name) = LOWER($1)");
        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(name.trim())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Company::from))
    }

    /// Insert-or-fetch in one statement; the no-op update makes
    /// `RETURNING` yield the existing row on conflict.
    async fn get_or_create(&self, name: &str) -> Result<Company, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Company name is required"));
        }

        let sql = format!(
            r#"
            INSERT INTO companies (id, name)
            VALUES ($1, $2)
            ON CONFLICT ((LOWER(name))) DO UPDATE SET name = companies.name
            RETURNING {COMPANY_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(Uuid::new_v4().to_string())
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => in_use(id),
                _ => AppError::Database(e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}

/// In-memory company repository backed by a shared `InMemoryStore`.
#[derive(Clone)]
pub struct InMemoryCompanyRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCompanyRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    fn lookup(&self, name: &str) -> Option<Company> {
        self.store
            .companies
            .iter()
            .find(|entry| entry.has_name(name))
            .map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn get_all(&self) -> Result<Vec<Company>, AppError> {
        self.store.simulate_latency().await;

        let mut companies: Vec<Company> = self
            .store
            .companies
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        companies.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(companies)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Company>, AppError> {
        self.store.simulate_latency().await;
        Ok(self.store.companies.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, AppError> {
        self.store.simulate_latency().await;
        Ok(self.lookup(name))
    }

    async fn get_or_create(&self, name: &str) -> Result<Company, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Company name is required"));
        }
        self.store.simulate_latency().await;

        let _guard = self.store.exclusive();
        if let Some(existing) = self.lookup(name) {
            return Ok(existing);
        }

        let company = Company::named(Uuid::new_v4().to_string(), name);
        self.store
            .companies
            .insert(company.id.clone(), company.clone());
        tracing::debug!(id = %company.id, name = %company.name, "Company created");
        Ok(company)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.store.simulate_latency().await;

        let _guard = self.store.exclusive();
        if self.store.company_in_use(id) {
            return Err(in_use(id));
        }
        Ok(self.store.companies.remove(id).is_some())
    }
}
