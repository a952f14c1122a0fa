use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::get_report,
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::update_report_status,
        // Dashboard
        dashboard_handlers::dashboard_handler::get_summary,
        dashboard_handlers::dashboard_handler::get_recent,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Reports
            reports_models::ReportId,
            reports_models::ReportType,
            reports_models::ReportStatus,
            reports_models::ReportUrgency,
            reports_dtos::ReportResponseDto,
            reports_dtos::CreateReportDto,
            reports_dtos::UpdateReportStatusDto,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            ApiResponse<reports_dtos::ReportResponseDto>,
            // Dashboard
            dashboard_dtos::StatusCountsDto,
            dashboard_dtos::UrgencyCountsDto,
            dashboard_dtos::TypeStatDto,
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            dashboard_dtos::DashboardRecentDto,
            ApiResponse<dashboard_dtos::DashboardRecentDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
        )
    ),
    tags(
        (name = "reports", description = "Environmental-crime reports (denúncias)"),
        (name = "Dashboard", description = "Aggregated report statistics"),
        (name = "categories", description = "Report types and their labels"),
    ),
    info(
        title = "Denúncias Ambientais API",
        version = "0.1.0",
        description = "API documentation for Denúncias Ambientais",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
