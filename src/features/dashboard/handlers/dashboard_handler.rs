use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

// ============================================================================
// Summary
// ============================================================================

/// Get dashboard summary statistics
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>)
    )
)]
pub async fn get_summary(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>, AppError> {
    let summary = service.get_summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

// ============================================================================
// Recent Reports
// ============================================================================

/// Get the latest submitted reports, newest first
#[utoipa::path(
    get,
    path = "/api/dashboard/recent",
    tag = "Dashboard",
    params(RecentQueryParams),
    responses(
        (status = 200, description = "Recent reports", body = ApiResponse<DashboardRecentDto>)
    )
)]
pub async fn get_recent(
    State(service): State<Arc<DashboardService>>,
    Query(params): Query<RecentQueryParams>,
) -> Result<Json<ApiResponse<DashboardRecentDto>>, AppError> {
    let data = service.get_recent(&params).await?;
    Ok(Json(ApiResponse::success(Some(data), None, None)))
}
