use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::reports::dtos::ReportResponseDto;
use crate::features::reports::models::{ReportStatus, ReportType, ReportUrgency};

// ============================================================================
// Summary
// ============================================================================

/// Report counts per review status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusCountsDto {
    pub pending: i64,
    pub investigating: i64,
    pub resolved: i64,
    pub dismissed: i64,
}

impl StatusCountsDto {
    pub fn increment(&mut self, status: ReportStatus) {
        match status {
            ReportStatus::Pending => self.pending += 1,
            ReportStatus::Investigating => self.investigating += 1,
            ReportStatus::Resolved => self.resolved += 1,
            ReportStatus::Dismissed => self.dismissed += 1,
        }
    }

    pub fn sum(&self) -> i64 {
        self.pending + self.investigating + self.resolved + self.dismissed
    }
}

/// Report counts per urgency level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UrgencyCountsDto {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
    pub critical: i64,
}

impl UrgencyCountsDto {
    pub fn increment(&mut self, urgency: ReportUrgency) {
        match urgency {
            ReportUrgency::Low => self.low += 1,
            ReportUrgency::Medium => self.medium += 1,
            ReportUrgency::High => self.high += 1,
            ReportUrgency::Critical => self.critical += 1,
        }
    }

    pub fn sum(&self) -> i64 {
        self.low + self.medium + self.high + self.critical
    }
}

/// Share of one report type in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeStatDto {
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub label: String,
    pub count: i64,
    /// Percentage of all reports, one decimal place; 0 when there are no reports
    pub percentage: f64,
}

/// Dashboard summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub total: i64,
    pub by_status: StatusCountsDto,
    pub by_urgency: UrgencyCountsDto,
    /// One entry per report type, zero counts included
    pub by_type: Vec<TypeStatDto>,
    /// Critical reports still pending or under investigation
    pub critical_open: i64,
}

// ============================================================================
// Recent Reports
// ============================================================================

/// Query params for recent reports
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RecentQueryParams {
    /// Maximum reports to return (default: 3, clamped to 1-100)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for RecentQueryParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> i64 {
    3
}

/// Recent reports response, newest submission first
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRecentDto {
    pub reports: Vec<ReportResponseDto>,
    /// Number of stored reports, regardless of `limit`
    pub total_count: i64,
}
