use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    CreateReportDto, ReportQueryParams, ReportResponseDto, UpdateReportStatusDto,
};
use crate::features::reports::models::FilterCriteria;
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta};

/// List reports matching the given filters
///
/// Filters combine with AND; the stored order is kept. An unknown status or
/// urgency yields an empty list rather than an error.
#[utoipa::path(
    get,
    path = "/api/reports",
    params(ReportQueryParams),
    responses(
        (status = 200, description = "Matching reports", body = ApiResponse<Vec<ReportResponseDto>>)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
    Query(params): Query<ReportQueryParams>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let criteria = FilterCriteria::from(&params);
    let reports = service.list(&criteria).await?;
    let total = reports.len();
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        Some(format!("{} denúncia(s) encontrada(s)", total)),
        Some(Meta::with_total(total)),
    )))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID, e.g. DEN-2024-001")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Malformed report ID"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Submit a new environmental-crime report
///
/// `type`, `urgency`, `location` and `description` are required. The report
/// is kept in memory only and starts as `pending`.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    dto.validate()?;

    let data = dto
        .into_create_report()
        .ok_or_else(|| AppError::Validation("Missing required fields".to_string()))?;
    let report = service.create(data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(report.into()),
            Some("Denúncia enviada com sucesso!".to_string()),
            None,
        )),
    ))
}

/// Update report status (external review process)
#[utoipa::path(
    patch,
    path = "/api/reports/{id}/status",
    params(
        ("id" = String, Path, description = "Report ID, e.g. DEN-2024-001")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Malformed report ID or status"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn update_report_status(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.update_status(&id, dto.status).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}
