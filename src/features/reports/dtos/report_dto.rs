use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::reports::models::{
    CreateReport, FilterCriteria, Report, ReportId, ReportStatus, ReportType, ReportUrgency,
};
use crate::shared::constants::{
    MAX_DESCRIPTION_LENGTH, MAX_LOCATION_LENGTH, MAX_REPORTER_FIELD_LENGTH,
};
use crate::shared::validation::{normalize_optional, validate_not_blank};

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: ReportId,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub type_label: String,
    pub location: String,
    pub description: String,
    pub status: ReportStatus,
    pub status_label: String,
    pub urgency: ReportUrgency,
    pub urgency_label: String,
    /// Reporter name, or "Anônimo" when none was given
    pub reporter_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_contact: Option<String>,
    pub date: NaiveDate,
    pub last_update: NaiveDate,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        let reporter_name = r.reporter_display_name().to_string();
        Self {
            id: r.id,
            report_type: r.report_type,
            type_label: r.report_type.label().to_string(),
            location: r.location,
            description: r.description,
            status: r.status,
            status_label: r.status.label().to_string(),
            urgency: r.urgency,
            urgency_label: r.urgency.label().to_string(),
            reporter_name,
            reporter_contact: r.reporter_contact,
            date: r.date,
            last_update: r.last_update,
        }
    }
}

/// Request DTO for submitting a new report
///
/// `type`, `urgency`, `location` and `description` are required; the
/// reporter fields are optional and blank values count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportDto {
    #[serde(rename = "type", default)]
    #[validate(required(message = "Report type is required"))]
    pub report_type: Option<ReportType>,

    #[serde(default)]
    #[validate(
        length(min = 1, max = MAX_LOCATION_LENGTH, message = "Location must be 1-500 characters"),
        custom(function = "validate_not_blank")
    )]
    pub location: String,

    #[serde(default)]
    #[validate(
        length(
            min = 1,
            max = MAX_DESCRIPTION_LENGTH,
            message = "Description must be 1-5000 characters"
        ),
        custom(function = "validate_not_blank")
    )]
    pub description: String,

    #[validate(length(
        max = MAX_REPORTER_FIELD_LENGTH,
        message = "Reporter name must not exceed 255 characters"
    ))]
    pub reporter_name: Option<String>,

    /// Phone number or email, free text
    #[validate(length(
        max = MAX_REPORTER_FIELD_LENGTH,
        message = "Reporter contact must not exceed 255 characters"
    ))]
    pub reporter_contact: Option<String>,

    #[serde(default)]
    #[validate(required(message = "Urgency is required"))]
    pub urgency: Option<ReportUrgency>,
}

impl CreateReportDto {
    /// Convert a validated submission into model data.
    ///
    /// Returns `None` when a required field is missing, i.e. when
    /// `validate()` would have failed.
    pub fn into_create_report(self) -> Option<CreateReport> {
        Some(CreateReport {
            report_type: self.report_type?,
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            urgency: self.urgency?,
            reporter_name: normalize_optional(self.reporter_name),
            reporter_contact: normalize_optional(self.reporter_contact),
        })
    }
}

/// Query params for listing reports
///
/// Every field is optional; an empty value or `all` means no constraint.
/// Unknown status or urgency values match no report.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ReportQueryParams {
    /// Substring of the report type label (case-sensitive), e.g. "Poluição"
    #[serde(rename = "type")]
    pub report_type: Option<String>,
    /// Exact status: pending, investigating, resolved, dismissed
    pub status: Option<String>,
    /// Exact urgency: low, medium, high, critical
    pub urgency: Option<String>,
    /// Case-insensitive text matched against location, description and id
    pub search: Option<String>,
}

impl From<&ReportQueryParams> for FilterCriteria {
    fn from(params: &ReportQueryParams) -> Self {
        FilterCriteria::from_raw(
            params.report_type.as_deref(),
            params.status.as_deref(),
            params.urgency.as_deref(),
            params.search.as_deref(),
        )
    }
}

/// Request DTO for updating report status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::FieldMatch;
    use crate::features::reports::seed::sample_reports;

    fn valid_dto() -> CreateReportDto {
        CreateReportDto {
            report_type: Some(ReportType::NoisePollution),
            location: "Rua das Flores, 123, Centro - SP".to_string(),
            description: "Som alto de madrugada vindo de uma fábrica.".to_string(),
            reporter_name: Some("  ".to_string()),
            reporter_contact: Some("ana@example.com".to_string()),
            urgency: Some(ReportUrgency::Low),
        }
    }

    #[test]
    fn test_valid_submission() {
        let dto = valid_dto();
        assert!(dto.validate().is_ok());

        let data = dto.into_create_report().unwrap();
        assert_eq!(data.report_type, ReportType::NoisePollution);
        assert_eq!(data.reporter_name, None);
        assert_eq!(data.reporter_contact.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn test_missing_required_fields_block_submission() {
        let errors = CreateReportDto::default().validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 4);
        for field in ["report_type", "location", "description", "urgency"] {
            assert!(fields.contains_key(field), "missing error for {}", field);
        }
        assert!(CreateReportDto::default().into_create_report().is_none());
    }

    #[test]
    fn test_blank_location_is_rejected() {
        let dto = CreateReportDto {
            location: "   ".to_string(),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("location"));
    }

    #[test]
    fn test_overlong_reporter_name_is_rejected() {
        let dto = CreateReportDto {
            reporter_name: Some("a".repeat(256)),
            ..valid_dto()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_deserialize_uses_type_key() {
        let json = r#"{
            "type": "burning",
            "location": "Cerrado - GO",
            "description": "Queimada",
            "reporterName": "Ana",
            "urgency": "critical"
        }"#;
        let dto: CreateReportDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.report_type, Some(ReportType::Burning));
        assert_eq!(dto.urgency, Some(ReportUrgency::Critical));
        assert!(dto.validate().is_ok());

        // Missing fields deserialize and then fail validation
        let dto: CreateReportDto = serde_json::from_str("{}").unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_response_dto_labels() {
        let dto = ReportResponseDto::from(sample_reports().remove(1));
        assert_eq!(dto.type_label, "Queimadas");
        assert_eq!(dto.status_label, "Pendente");
        assert_eq!(dto.urgency_label, "Crítica");
        assert_eq!(dto.reporter_name, "Anônimo");

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id"], "DEN-2024-002");
        assert_eq!(json["type"], "burning");
        assert_eq!(json["lastUpdate"], "2024-01-14");
        assert!(json.get("reporterContact").is_none());
    }

    #[test]
    fn test_query_params_to_criteria() {
        let params = ReportQueryParams {
            report_type: Some("all".to_string()),
            status: Some("resolved".to_string()),
            urgency: Some("".to_string()),
            search: Some("rio".to_string()),
        };
        let criteria = FilterCriteria::from(&params);

        assert_eq!(criteria.report_type, None);
        assert_eq!(criteria.status, FieldMatch::Is(ReportStatus::Resolved));
        assert_eq!(criteria.urgency, FieldMatch::Any);
        assert_eq!(criteria.search.as_deref(), Some("rio"));
    }
}
