use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::regions::models::{NewRegion, Region};

/// Response DTO for region data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    pub id: Uuid,
    #[schema(example = "AKL")]
    pub code: String,
    #[schema(example = "Auckland")]
    pub name: String,
    pub image_url: Option<String>,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            image_url: region.image_url,
        }
    }
}

/// Request DTO for creating a region
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegionDto {
    #[schema(example = "AKL")]
    pub code: String,
    #[schema(example = "Auckland")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "https://example.com/auckland.jpg")]
    pub image_url: Option<String>,
}

impl From<CreateRegionDto> for NewRegion {
    fn from(dto: CreateRegionDto) -> Self {
        Self {
            id: None,
            code: dto.code,
            name: dto.name,
            image_url: dto.image_url,
        }
    }
}
