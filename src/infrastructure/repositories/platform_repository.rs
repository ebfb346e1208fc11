//! Platform Repository Implementations
//!
//! PostgreSQL and in-memory implementations of the PlatformRepository trait.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Platform, PlatformRepository};
use crate::infrastructure::memory::InMemoryStore;
use crate::shared::error::AppError;

const PLATFORM_COLUMNS: &str = "id, name, url, is_active, created_at, updated_at";

/// Database row representation of the platforms table.
#[derive(Debug, sqlx::FromRow)]
struct PlatformRow {
    id: String,
    name: String,
    url: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PlatformRow> for Platform {
    fn from(row: PlatformRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            url: row.url,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn in_use(id: &str) -> AppError {
    AppError::Conflict(format!(
        "Platform {} is referenced by job applications and cannot be deleted",
        id
    ))
}

/// PostgreSQL platform repository.
#[derive(Clone)]
pub struct PgPlatformRepository {
    pool: PgPool,
}

impl PgPlatformRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlatformRepository for PgPlatformRepository {
    async fn get_all(&self) -> Result<Vec<Platform>, AppError> {
        let sql = format!("SELECT {PLATFORM_COLUMNS} FROM platforms ORDER BY name");
        let rows = sqlx::query_as::<_, PlatformRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Platform::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Platform>, AppError> {
        let sql = format!("SELECT {PLATFORM_COLUMNS} FROM platforms WHERE id = $1");
        let row = sqlx::query_as::<_, PlatformRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Platform::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Platform>, AppError> {
        let sql = format!("SELECT {PLATFORM_COLUMNS} FROM platforms WHERE LOWER(name) = LOWER($1)");
        let row = sqlx::query_as::<_, PlatformRow>(&sql)
            .bind(name.trim())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Platform::from))
    }

    async fn get_or_create(&self, name: &str) -> Result<Platform, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Platform name is required"));
        }

        let sql = format!(
            r#"
            INSERT INTO platforms (id, name)
            VALUES ($1, $2)
            ON CONFLICT ((LOWER(name))) DO UPDATE SET name = platforms.name
            RETURNING {PLATFORM_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, PlatformRow>(&sql)
            .bind(Uuid::new_v4().to_string())
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM platforms WHERE id = $1")
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

/// In-memory platform repository backed by a shared `InMemoryStore`.
#[derive(Clone)]
pub struct InMemoryPlatformRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryPlatformRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    fn lookup(&self, name: &str) -> Option<Platform> {
        self.store
            .platforms
            .iter()
            .find(|entry| entry.has_name(name))
            .map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl PlatformRepository for InMemoryPlatformRepository {
    async fn get_all(&self) -> Result<Vec<Platform>, AppError> {
        self.store.simulate_latency().await;

        let mut platforms: Vec<Platform> = self
            .store
            .platforms
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        platforms.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(platforms)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Platform>, AppError> {
        self.store.simulate_latency().await;
        Ok(self.store.platforms.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Platform>, AppError> {
        self.store.simulate_latency().await;
        Ok(self.lookup(name))
    }

    async fn get_or_create(&self, name: &str) -> Result<Platform, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Platform name is required"));
        }
        self.store.simulate_latency().await;

        let _guard = self.store.exclusive();
        if let Some(existing) = self.lookup(name) {
            return Ok(existing);
        }

        let platform = Platform::named(Uuid::new_v4().to_string(), name);
        self.store
            .platforms
            .insert(platform.id.clone(), platform.clone());
        tracing::debug!(id = %platform.id, name = %platform.name, "Platform created");
        Ok(platform)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.store.simulate_latency().await;

        let _guard = self.store.exclusive();
        if self.store.platform_in_use(id) {
            return Err(in_use(id));
        }
        Ok(self.store.platforms.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn repository() -> InMemoryPlatformRepository {
        InMemoryPlatformRepository::new(Arc::new(InMemoryStore::seeded(Duration::ZERO)))
    }

    #[tokio::test]
    async fn test_get_or_create_reuses_seeded_platform() {
        let repo = repository();

        let platform = repo.get_or_create("linkedin").await.unwrap();

        assert_eq!(platform.id, "platform-001");
        assert!(platform.is_active);
    }

    #[tokio::test]
    async fn test_get_or_create_new_platform_is_active() {
        let repo = repository();

        let platform = repo.get_or_create("Hacker News").await.unwrap();

        assert!(platform.is_active);
        assert_eq!(platform.name, "Hacker News");
        assert_eq!(repo.get_by_id(&platform.id).await.unwrap(), Some(platform));
    }

    #[tokio::test]
    async fn test_inactive_platform_is_still_listed() {
        let repo = repository();

        let glassdoor = repo.find_by_name("Glassdoor").await.unwrap().unwrap();

        assert!(!glassdoor.is_active);
        assert!(repo.get_all().await.unwrap().contains(&glassdoor));
    }

    #[tokio::test]
    async fn test_delete_restricted_while_referenced() {
        let repo = repository();

        let result = repo.delete("platform-001").await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        // Glassdoor is seeded but unused
        assert!(repo.delete("platform-004").await.unwrap());
        assert!(repo.find_by_name("Glassdoor").await.unwrap().is_none());
    }
}
