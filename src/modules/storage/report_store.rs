//! Report storage
//!
//! `ReportStore` is the persistence seam for reports. The only implementation
//! keeps everything in process memory, in insertion order; nothing survives a
//! restart.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use tokio::sync::RwLock;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{CreateReport, Report, ReportId, ReportStatus};

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// All reports, in insertion order
    async fn list(&self) -> Result<Vec<Report>>;

    async fn get(&self, id: &ReportId) -> Result<Option<Report>>;

    /// Store an already identified report. Fails with `Conflict` on a duplicate id.
    async fn insert(&self, report: Report) -> Result<Report>;

    /// Allocate the next `DEN-YYYY-NNN` id for `today`'s year and store a new pending report
    async fn create(&self, data: CreateReport, today: NaiveDate) -> Result<Report>;

    /// Returns `None` when no report has this id
    async fn update_status(
        &self,
        id: &ReportId,
        status: ReportStatus,
        on: NaiveDate,
    ) -> Result<Option<Report>>;
}

/// In-process report collection guarded by an async `RwLock`
#[derive(Default)]
pub struct InMemoryReportStore {
    reports: RwLock<Vec<Report>>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection; order is preserved
    #[cfg(test)]
    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports: RwLock::new(reports),
        }
    }
}

/// Next free sequence number for `year`: one past the highest in use.
/// `None` once the year has used `u32::MAX`.
fn next_sequence(reports: &[Report], year: i32) -> Option<u32> {
    reports
        .iter()
        .filter(|r| r.id.year() == year)
        .map(|r| r.id.sequence())
        .max()
        .unwrap_or(0)
        .checked_add(1)
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn list(&self) -> Result<Vec<Report>> {
        Ok(self.reports.read().await.clone())
    }

    async fn get(&self, id: &ReportId) -> Result<Option<Report>> {
        let reports = self.reports.read().await;
        Ok(reports.iter().find(|r| &r.id == id).cloned())
    }

    async fn insert(&self, report: Report) -> Result<Report> {
        let mut reports = self.reports.write().await;
        if reports.iter().any(|r| r.id == report.id) {
            return Err(AppError::Conflict(format!(
                "Report {} already exists",
                report.id
            )));
        }

        debug!("Inserted report {}", report.id);
        reports.push(report.clone());
        Ok(report)
    }

    async fn create(&self, data: CreateReport, today: NaiveDate) -> Result<Report> {
        let mut reports = self.reports.write().await;
        let year = today.year();
        let sequence = next_sequence(&reports, year).ok_or_else(|| {
            AppError::Conflict(format!("No report sequence numbers left for {}", year))
        })?;
        let report = Report::submitted(ReportId::new(year, sequence), data, today);

        debug!(
            "Stored report {} (type: {}, urgency: {})",
            report.id, report.report_type, report.urgency
        );
        reports.push(report.clone());
        Ok(report)
    }

    async fn update_status(
        &self,
        id: &ReportId,
        status: ReportStatus,
        on: NaiveDate,
    ) -> Result<Option<Report>> {
        let mut reports = self.reports.write().await;
        Ok(reports.iter_mut().find(|r| &r.id == id).map(|report| {
            report.transition(status, on);
            report.clone()
        }))
    }
}
