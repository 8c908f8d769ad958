use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::regions::dtos::{CreateRegionDto, RegionResponseDto};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

/// List all regions
#[utoipa::path(
    get,
    path = "/api/regions",
    responses(
        (status = 200, description = "List of regions", body = ApiResponse<Vec<RegionResponseDto>>),
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let regions = service.list().await?;
    let total = regions.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(regions),
        None,
        Some(Meta { total }),
    )))
}

/// Get a region by id
#[utoipa::path(
    get,
    path = "/api/regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Region details", body = ApiResponse<RegionResponseDto>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<RegionResponseDto>>> {
    let region = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(region), None, None)))
}

/// Create a region
///
/// Responds with the created region and a `Location` header pointing at it.
#[utoipa::path(
    post,
    path = "/api/regions",
    request_body = CreateRegionDto,
    responses(
        (status = 201, description = "Region created", body = ApiResponse<RegionResponseDto>,
            headers(("Location" = String, description = "URL of the created region"))),
        (status = 400, description = "Invalid region data")
    ),
    tag = "regions"
)]
pub async fn create_region(
    State(service): State<Arc<RegionService>>,
    payload: Option<AppJson<CreateRegionDto>>,
) -> Result<impl IntoResponse> {
    let region = service.create(payload.map(|AppJson(dto)| dto)).await?;
    let location = format!("/api/regions/{}", region.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(Some(region), None, None)),
    ))
}

/// Delete a region by id
#[utoipa::path(
    delete,
    path = "/api/regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region ID")
    ),
    responses(
        (status = 204, description = "Region deleted"),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn delete_region(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
