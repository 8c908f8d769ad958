use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{NewRegion, Region};
use crate::features::regions::stores::RegionStore;

/// Region store kept in process memory, in insertion order
#[derive(Default)]
pub struct InMemoryRegionStore {
    rows: RwLock<Vec<Region>>,
}

#[async_trait]
impl RegionStore for InMemoryRegionStore {
    async fn list_all(&self) -> Result<Vec<Region>> {
        Ok(self.rows.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>> {
        Ok(self.rows.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, region: NewRegion) -> Result<Region> {
        let row = Region {
            id: region.id.unwrap_or_else(Uuid::now_v7),
            code: region.code,
            name: region.name,
            image_url: region.image_url,
            created_at: Utc::now(),
        };
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() != before)
    }
}

/// Store whose every call fails as if the database were unreachable
pub struct FailingRegionStore;

#[async_trait]
impl RegionStore for FailingRegionStore {
    async fn list_all(&self) -> Result<Vec<Region>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: Uuid) -> Result<Option<Region>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _region: NewRegion) -> Result<Region> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn remove(&self, _id: Uuid) -> Result<bool> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_region(code: &str) -> NewRegion {
        NewRegion {
            code: code.to_string(),
            name: format!("{} region", code),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_keeps_preset_id() {
        let store = InMemoryRegionStore::default();
        let id = Uuid::new_v4();

        let region = store
            .insert(NewRegion {
                id: Some(id),
                ..new_region("TKI")
            })
            .await
            .unwrap();

        assert_eq!(region.id, id);
        assert_eq!(store.get_by_id(id).await.unwrap(), Some(region));
    }

    #[tokio::test]
    async fn test_remove_twice_reports_missing() {
        let store = InMemoryRegionStore::default();
        let region = store.insert(new_region("HKB")).await.unwrap();

        assert!(store.remove(region.id).await.unwrap());
        assert!(!store.remove(region.id).await.unwrap());
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
