use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, Meta};

/// List all report categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list();
    let total = categories.len();
    Ok(Json(ApiResponse::success(
        Some(categories),
        None,
        Some(Meta::with_total(total)),
    )))
}

/// Get category by machine value
#[utoipa::path(
    get,
    path = "/api/categories/{value}",
    params(
        ("value" = String, Path, description = "Category value, e.g. deforestation")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(value): Path<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get_by_value(&value)?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::shared::test_helpers::test_server;

    #[tokio::test]
    async fn test_category_endpoints() {
        let server = test_server();

        let response = server.get("/api/categories").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["meta"]["total"], 6);
        assert_eq!(body["data"][1]["value"], "burning");
        assert_eq!(body["data"][1]["label"], "Queimadas");

        let response = server.get("/api/categories/air_pollution").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"]["label"], "Poluição do Ar");

        server
            .get("/api/categories/volcano")
            .await
            .assert_status_not_found();
    }
}
