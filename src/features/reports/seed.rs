//! Sample reports loaded at startup when `SEED_SAMPLE_DATA` is enabled.

use chrono::NaiveDate;

use crate::features::reports::models::{Report, ReportId, ReportStatus, ReportType, ReportUrgency};

struct SampleReport {
    sequence: u32,
    report_type: ReportType,
    location: &'static str,
    description: &'static str,
    status: ReportStatus,
    urgency: ReportUrgency,
    reporter_name: Option<&'static str>,
    date: NaiveDate,
    last_update: NaiveDate,
}

const SAMPLE_YEAR: i32 = 2024;

/// Evaluated in const context, so an impossible date fails the build
const fn sample_date(month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(SAMPLE_YEAR, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}

const SAMPLES: [SampleReport; 4] = [
    SampleReport {
        sequence: 1,
        report_type: ReportType::Deforestation,
        location: "Mata Atlântica, Região Sul - SP",
        description: "Desmatamento irregular de área de preservação permanente próxima ao rio.",
        status: ReportStatus::Investigating,
        urgency: ReportUrgency::High,
        reporter_name: Some("Ana Silva"),
        date: sample_date(1, 15),
        last_update: sample_date(1, 18),
    },
    SampleReport {
        sequence: 2,
        report_type: ReportType::Burning,
        location: "Cerrado, Fazenda Santa Rita - GO",
        description: "Queimada descontrolada atingindo área de reserva legal.",
        status: ReportStatus::Pending,
        urgency: ReportUrgency::Critical,
        reporter_name: None,
        date: sample_date(1, 14),
        last_update: sample_date(1, 14),
    },
    SampleReport {
        sequence: 3,
        report_type: ReportType::IllegalDisposal,
        location: "Rio Tietê, Ponte Nova - SP",
        description: "Descarte de resíduos industriais no rio.",
        status: ReportStatus::Resolved,
        urgency: ReportUrgency::Medium,
        reporter_name: Some("João Santos"),
        date: sample_date(1, 10),
        last_update: sample_date(1, 16),
    },
    SampleReport {
        sequence: 4,
        report_type: ReportType::WaterPollution,
        location: "Lagoa dos Patos - RS",
        description: "Mortandade de peixes e água com coloração anormal.",
        status: ReportStatus::Investigating,
        urgency: ReportUrgency::High,
        reporter_name: Some("Maria Oliveira"),
        date: sample_date(1, 12),
        last_update: sample_date(1, 17),
    },
];

/// The four sample reports `DEN-2024-001..004`, in id order
pub fn sample_reports() -> Vec<Report> {
    SAMPLES.iter().map(SampleReport::to_report).collect()
}

impl SampleReport {
    fn to_report(&self) -> Report {
        Report {
            id: ReportId::new(SAMPLE_YEAR, self.sequence),
            report_type: self.report_type,
            location: self.location.to_string(),
            description: self.description.to_string(),
            status: self.status,
            urgency: self.urgency,
            reporter_name: self.reporter_name.map(str::to_string),
            reporter_contact: None,
            date: self.date,
            last_update: self.last_update,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_reports_are_complete() {
        let reports = sample_reports();
        assert_eq!(reports.len(), 4);

        let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["DEN-2024-001", "DEN-2024-002", "DEN-2024-003", "DEN-2024-004"]
        );
    }

    #[test]
    fn test_sample_dates() {
        let reports = sample_reports();
        assert_eq!(reports[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(reports.iter().all(|r| r.date.format("%Y").to_string() == "2024"));
    }

    #[test]
    fn test_sample_reports_respect_date_invariant() {
        for report in sample_reports() {
            assert!(report.last_update >= report.date, "{}", report.id);
            assert!(!report.location.trim().is_empty());
            assert!(!report.description.trim().is_empty());
        }
    }

    #[test]
    fn test_anonymous_sample() {
        let reports = sample_reports();
        assert_eq!(reports[1].reporter_display_name(), "Anônimo");
        assert_eq!(reports[0].reporter_display_name(), "Ana Silva");
    }
}
