//! Fixtures shared by unit and handler tests.

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use chrono::{Duration, NaiveDate};
use fake::faker::address::en::{CityName, StateAbbr, StreetName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::{Fake, Faker};

use crate::features::categories::CategoryService;
use crate::features::dashboard::DashboardService;
use crate::features::reports::models::{
    Report, ReportId, ReportStatus, ReportType, ReportUrgency,
};
use crate::features::reports::ReportService;
use crate::modules::storage::{InMemoryReportStore, ReportStore};

pub use crate::features::reports::seed::sample_reports;

fn pick<T: Copy, const N: usize>(values: [T; N]) -> T {
    values[(0..N).fake::<usize>()]
}

/// `n` random reports with ids `DEN-2024-001` onwards
pub fn random_reports(n: usize) -> Vec<Report> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();

    (0..n)
        .map(|i| {
            let date = base + Duration::days((0..300i64).fake::<i64>());
            let last_update = date + Duration::days((0..30i64).fake::<i64>());
            let location = format!(
                "{}, {} - {}",
                StreetName().fake::<String>(),
                CityName().fake::<String>(),
                StateAbbr().fake::<String>()
            );

            Report {
                id: ReportId::new(2024, i as u32 + 1),
                report_type: pick(ReportType::ALL),
                location,
                description: Sentence(4..12).fake(),
                status: pick(ReportStatus::ALL),
                urgency: pick(ReportUrgency::ALL),
                reporter_name: Faker.fake::<bool>().then(|| Name().fake()),
                reporter_contact: Faker.fake::<bool>().then(|| SafeEmail().fake()),
                date,
                last_update,
            }
        })
        .collect()
}

fn api_router(store: Arc<dyn ReportStore>) -> Router {
    crate::build_api_router(
        Arc::new(ReportService::new(Arc::clone(&store))),
        Arc::new(DashboardService::new(store)),
        Arc::new(CategoryService::new()),
    )
}

/// API routes over the four sample reports, without transport layers
pub fn seeded_api_router() -> Router {
    api_router(Arc::new(InMemoryReportStore::with_reports(sample_reports())))
}

/// API server over the four sample reports
pub fn test_server() -> TestServer {
    TestServer::new(seeded_api_router()).unwrap()
}

/// API server over an empty store
pub fn empty_test_server() -> TestServer {
    TestServer::new(api_router(Arc::new(InMemoryReportStore::new()))).unwrap()
}
