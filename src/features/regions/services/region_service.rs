use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::{CreateRegionDto, RegionResponseDto};
use crate::features::regions::stores::RegionStore;

pub const REGION_NOT_FOUND: &str = "Region not found.";
pub const INVALID_REGION_DATA: &str = "Invalid region data.";

/// Service for region CRUD operations
pub struct RegionService {
    store: Arc<dyn RegionStore>,
}

impl RegionService {
    pub fn new(store: Arc<dyn RegionStore>) -> Self {
        Self { store }
    }

    /// List every region
    pub async fn list(&self) -> Result<Vec<RegionResponseDto>> {
        let regions = self.store.list_all().await?;
        Ok(regions.into_iter().map(Into::into).collect())
    }

    /// Get a region by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<RegionResponseDto> {
        self.store
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(REGION_NOT_FOUND.to_string()))
    }

    /// Create a region from the request payload.
    ///
    /// Only the presence of the payload is checked; empty strings are stored
    /// as given.
    pub async fn create(&self, dto: Option<CreateRegionDto>) -> Result<RegionResponseDto> {
        let dto = dto.ok_or_else(|| AppError::BadRequest(INVALID_REGION_DATA.to_string()))?;

        let region = self.store.insert(dto.into()).await?;
        tracing::info!(region_id = %region.id, code = %region.code, "Region created");

        Ok(region.into())
    }

    /// Delete a region by id
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if self.store.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(REGION_NOT_FOUND.to_string()));
        }

        // Another request may have removed the row after the check
        if !self.store.remove(id).await? {
            tracing::warn!(region_id = %id, "Region already removed by another request");
        }
        tracing::info!(region_id = %id, "Region deleted");

        Ok(())
    }
}
