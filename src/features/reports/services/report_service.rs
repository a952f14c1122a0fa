use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{
    apply_filter, CreateReport, FilterCriteria, Report, ReportId, ReportStatus,
};
use crate::modules::storage::ReportStore;

/// Service for report operations
pub struct ReportService {
    store: Arc<dyn ReportStore>,
}

impl ReportService {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    /// List reports matching every active criterion, in stored order
    pub async fn list(&self, criteria: &FilterCriteria) -> Result<Vec<Report>> {
        let reports = self.store.list().await?;
        if criteria.is_empty() {
            return Ok(reports);
        }

        let filtered = apply_filter(&reports, criteria);
        tracing::debug!(
            "Filtered reports: {} of {} match {:?}",
            filtered.len(),
            reports.len(),
            criteria
        );
        Ok(filtered)
    }

    /// Get report by its `DEN-YYYY-NNN` identifier
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Report> {
        let id = ReportId::parse(raw_id)?;
        self.store.get(&id).await?.ok_or_else(|| {
            tracing::warn!("Report not found: {}", id);
            AppError::NotFound(format!("Report {} not found", id))
        })
    }

    /// Register a new submission; it starts as `pending` dated today
    pub async fn create(&self, data: CreateReport) -> Result<Report> {
        let today = Utc::now().date_naive();
        let report = self.store.create(data, today).await?;

        tracing::info!(
            "Created report: {} ({}, urgency {})",
            report.id,
            report.report_type.label(),
            report.urgency
        );

        Ok(report)
    }

    /// Record a status change decided by the review process
    pub async fn update_status(&self, raw_id: &str, status: ReportStatus) -> Result<Report> {
        let id = ReportId::parse(raw_id)?;
        let today = Utc::now().date_naive();

        let report = self
            .store
            .update_status(&id, status, today)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Status update for unknown report: {}", id);
                AppError::NotFound(format!("Report {} not found", id))
            })?;

        tracing::info!("Report {} moved to {}", report.id, report.status);
        Ok(report)
    }

    /// Load a batch of pre-identified reports, e.g. the startup sample data
    pub async fn import(&self, reports: Vec<Report>) -> Result<usize> {
        let count = reports.len();
        for report in reports {
            self.store.insert(report).await?;
        }
        Ok(count)
    }
}
