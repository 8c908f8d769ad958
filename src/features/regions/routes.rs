use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route(
            "/api/regions",
            get(handlers::list_regions).post(handlers::create_region),
        )
        .route(
            "/api/regions/{id}",
            get(handlers::get_region).delete(handlers::delete_region),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::features::regions::dtos::RegionResponseDto;
    use crate::shared::test_helpers::{FailingRegionStore, InMemoryRegionStore};
    use crate::shared::types::ApiResponse;

    fn server() -> TestServer {
        let service = Arc::new(RegionService::new(Arc::new(
            InMemoryRegionStore::default(),
        )));
        TestServer::new(routes(service)).unwrap()
    }

    async fn create_auckland(server: &TestServer) -> RegionResponseDto {
        let response = server
            .post("/api/regions")
            .json(&json!({
                "code": "AKL",
                "name": "Auckland",
                "imageUrl": "http://x/a.jpg"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        response
            .json::<ApiResponse<RegionResponseDto>>()
            .data
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_created_with_location() {
        let server = server();
        let response = server
            .post("/api/regions")
            .json(&json!({
                "code": "AKL",
                "name": "Auckland",
                "imageUrl": "http://x/a.jpg"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<RegionResponseDto> = response.json();
        let region = body.data.unwrap();
        assert!(body.success);
        assert!(!region.id.is_nil());
        assert_eq!(region.code, "AKL");
        assert_eq!(region.name, "Auckland");
        assert_eq!(region.image_url.as_deref(), Some("http://x/a.jpg"));

        let location = response.header(header::LOCATION);
        assert_eq!(
            location.to_str().unwrap(),
            format!("/api/regions/{}", region.id)
        );
    }

    #[tokio::test]
    async fn test_get_created_region() {
        let server = server();
        let created = create_auckland(&server).await;

        let response = server.get(&format!("/api/regions/{}", created.id)).await;

        response.assert_status_ok();
        let fetched = response
            .json::<ApiResponse<RegionResponseDto>>()
            .data
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_unknown_region_is_not_found() {
        let server = server();

        let response = server.get(&format!("/api/regions/{}", Uuid::new_v4())).await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Region not found.");
    }

    #[tokio::test]
    async fn test_create_with_null_body_is_bad_request() {
        let server = server();

        let response = server.post("/api/regions").json(&Value::Null).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid region data.");
    }

    #[tokio::test]
    async fn test_create_with_empty_body_is_bad_request() {
        let server = server();

        let response = server.post("/api/regions").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid region data.");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let server = server();
        let created = create_auckland(&server).await;
        let path = format!("/api/regions/{}", created.id);

        let response = server.delete(&path).await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());

        server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
        server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_returns_all_regions() {
        let server = server();
        let empty: ApiResponse<Vec<RegionResponseDto>> = server.get("/api/regions").await.json();
        assert_eq!(empty.data.unwrap().len(), 0);
        assert_eq!(empty.meta.unwrap().total, 0);

        let first = create_auckland(&server).await;
        let second = create_auckland(&server).await;

        let response = server.get("/api/regions").await;
        response.assert_status_ok();
        let body: ApiResponse<Vec<RegionResponseDto>> = response.json();
        assert_eq!(body.meta.unwrap().total, 2);
        assert_eq!(body.data.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_invalid_id_is_rejected() {
        let server = server();

        let response = server.get("/api/regions/not-a-uuid").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("id"));

        let response = server.delete("/api/regions/not-a-uuid").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal_error() {
        let service = Arc::new(RegionService::new(Arc::new(FailingRegionStore)));
        let server = TestServer::new(routes(service)).unwrap();

        let response = server.get("/api/regions").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["message"], "Database error occurred");
    }
}
