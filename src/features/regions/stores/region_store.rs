use async_trait::async_trait;
use sqlx::{pool::PoolConnection, PgPool, Postgres};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{NewRegion, Region};

/// Storage gateway for the `regions` table
#[async_trait]
pub trait RegionStore: Send + Sync {
    /// Every stored region, in insertion order
    async fn list_all(&self) -> Result<Vec<Region>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>>;

    /// Persist a region, assigning an id when `region.id` is unset
    async fn insert(&self, region: NewRegion) -> Result<Region>;

    /// Returns `true` if a row existed and was deleted
    async fn remove(&self, id: Uuid) -> Result<bool>;
}

const REGION_COLUMNS: &str = "id, code, name, image_url, created_at";

/// PostgreSQL-backed region store.
///
/// Each operation checks out its own connection from the pool; the
/// connection goes back to the pool when the operation ends, whether it
/// succeeded or not.
pub struct PgRegionStore {
    pool: PgPool,
}

impl PgRegionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn acquire(&self) -> Result<PoolConnection<Postgres>> {
        self.pool.acquire().await.map_err(|e| {
            tracing::error!("Failed to acquire database connection: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[async_trait]
impl RegionStore for PgRegionStore {
    async fn list_all(&self) -> Result<Vec<Region>> {
        let mut conn = self.acquire().await?;
        let query = format!(
            "SELECT {} FROM regions ORDER BY created_at, id",
            REGION_COLUMNS
        );

        sqlx::query_as::<_, Region>(&query)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list regions: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>> {
        let mut conn = self.acquire().await?;
        let query = format!("SELECT {} FROM regions WHERE id = $1", REGION_COLUMNS);

        sqlx::query_as::<_, Region>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch region {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, region: NewRegion) -> Result<Region> {
        let mut conn = self.acquire().await?;
        let id = region.id.unwrap_or_else(Uuid::now_v7);
        let query = format!(
            r#"
            INSERT INTO regions (id, code, name, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            REGION_COLUMNS
        );

        sqlx::query_as::<_, Region>(&query)
            .bind(id)
            .bind(&region.code)
            .bind(&region.name)
            .bind(&region.image_url)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert region {}: {:?}", region.code, e);
                AppError::Database(e)
            })
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let mut conn = self.acquire().await?;

        let result = sqlx::query("DELETE FROM regions WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete region {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
