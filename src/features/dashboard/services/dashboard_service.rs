use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::*;
use crate::features::reports::dtos::ReportResponseDto;
use crate::features::reports::models::{Report, ReportType, ReportUrgency};
use crate::modules::storage::ReportStore;

/// Service for dashboard statistics
pub struct DashboardService {
    store: Arc<dyn ReportStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    // ========================================================================
    // Summary
    // ========================================================================

    /// Get summary statistics over every stored report
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let reports = self.store.list().await?;
        let summary = aggregate(&reports);

        tracing::debug!(
            "Dashboard summary: total={}, critical_open={}",
            summary.total,
            summary.critical_open
        );

        Ok(summary)
    }

    // ========================================================================
    // Recent Reports
    // ========================================================================

    /// Get the latest submissions, newest first
    pub async fn get_recent(&self, params: &RecentQueryParams) -> Result<DashboardRecentDto> {
        let limit = params.limit.clamp(1, 100) as usize;
        let reports = self.store.list().await?;
        let total_count = reports.len() as i64;

        let recent = reports
            .into_iter()
            .rev()
            .take(limit)
            .map(ReportResponseDto::from)
            .collect();

        Ok(DashboardRecentDto {
            reports: recent,
            total_count,
        })
    }
}

/// Per-status, per-urgency and per-type statistics for a report collection
pub fn aggregate(reports: &[Report]) -> DashboardSummaryDto {
    let total = reports.len() as i64;
    let mut by_status = StatusCountsDto::default();
    let mut by_urgency = UrgencyCountsDto::default();
    let mut critical_open = 0;

    for report in reports {
        by_status.increment(report.status);
        by_urgency.increment(report.urgency);
        if report.urgency == ReportUrgency::Critical && report.status.is_open() {
            critical_open += 1;
        }
    }

    let by_type = ReportType::ALL
        .into_iter()
        .map(|report_type| {
            let count = reports
                .iter()
                .filter(|r| r.report_type == report_type)
                .count() as i64;
            TypeStatDto {
                report_type,
                label: report_type.label().to_string(),
                count,
                percentage: percentage(count, total),
            }
        })
        .collect();

    DashboardSummaryDto {
        total,
        by_status,
        by_urgency,
        by_type,
        critical_open,
    }
}

/// `100 * part / total` rounded to one decimal; 0 for an empty collection
fn percentage(part: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 * 100.0 / total as f64;
    (raw * 10.0).round() / 10.0
}
