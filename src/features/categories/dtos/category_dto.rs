use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::ReportType;

/// Response DTO for a report category (report type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    /// Stable machine value, as accepted by `POST /api/reports`
    pub value: ReportType,
    /// Display label, as matched by the `type` filter of `GET /api/reports`
    pub label: String,
}

impl From<ReportType> for CategoryResponseDto {
    fn from(t: ReportType) -> Self {
        Self {
            value: t,
            label: t.label().to_string(),
        }
    }
}
