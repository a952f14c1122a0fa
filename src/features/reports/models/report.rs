use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::shared::constants::{ANONYMOUS_REPORTER, REPORT_ID_PREFIX, REPORT_SEQUENCE_WIDTH};
use crate::shared::validation::REPORT_ID_REGEX;

/// Returned by `FromStr` when a value is outside one of the report enumerations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

/// Human-readable report identifier, `DEN-YYYY-NNN`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "DEN-2024-001")]
pub struct ReportId(String);

impl ReportId {
    pub fn new(year: i32, sequence: u32) -> Self {
        Self(format!(
            "{}-{:04}-{:0width$}",
            REPORT_ID_PREFIX,
            year,
            sequence,
            width = REPORT_SEQUENCE_WIDTH
        ))
    }

    /// Accepts `DEN-YYYY-NNN` whose sequence fits a `u32`
    pub fn parse(raw: &str) -> Result<Self> {
        let sequence_fits = REPORT_ID_REGEX
            .captures(raw)
            .is_some_and(|caps| caps[2].parse::<u32>().is_ok());

        if sequence_fits {
            Ok(Self(raw.to_string()))
        } else {
            Err(AppError::Validation(format!(
                "Invalid report id '{}': expected {}-YYYY-NNN",
                raw, REPORT_ID_PREFIX
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn year(&self) -> i32 {
        self.capture(1).unwrap_or_default()
    }

    pub fn sequence(&self) -> u32 {
        self.capture(2).unwrap_or_default()
    }

    fn capture<T: FromStr>(&self, group: usize) -> Option<T> {
        REPORT_ID_REGEX
            .captures(&self.0)
            .and_then(|caps| caps.get(group))
            .and_then(|m| m.as_str().parse().ok())
    }
}

impl TryFrom<String> for ReportId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ReportId> for String {
    fn from(id: ReportId) -> Self {
        id.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Incident category of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Deforestation,
    Burning,
    IllegalDisposal,
    WaterPollution,
    AirPollution,
    NoisePollution,
}

impl ReportType {
    pub const ALL: [ReportType; 6] = [
        ReportType::Deforestation,
        ReportType::Burning,
        ReportType::IllegalDisposal,
        ReportType::WaterPollution,
        ReportType::AirPollution,
        ReportType::NoisePollution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Deforestation => "deforestation",
            ReportType::Burning => "burning",
            ReportType::IllegalDisposal => "illegal_disposal",
            ReportType::WaterPollution => "water_pollution",
            ReportType::AirPollution => "air_pollution",
            ReportType::NoisePollution => "noise_pollution",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Deforestation => "Desmatamento",
            ReportType::Burning => "Queimadas",
            ReportType::IllegalDisposal => "Descarte Irregular",
            ReportType::WaterPollution => "Poluição da Água",
            ReportType::AirPollution => "Poluição do Ar",
            ReportType::NoisePollution => "Poluição Sonora",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Review workflow stage of a report; submissions start at the default, `Pending`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    Investigating,
    Resolved,
    Dismissed,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Pending,
        ReportStatus::Investigating,
        ReportStatus::Resolved,
        ReportStatus::Dismissed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Investigating => "investigating",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Dismissed => "dismissed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pendente",
            ReportStatus::Investigating => "Em Investigação",
            ReportStatus::Resolved => "Resolvida",
            ReportStatus::Dismissed => "Arquivada",
        }
    }

    /// Still waiting on the review process
    pub fn is_open(&self) -> bool {
        matches!(self, ReportStatus::Pending | ReportStatus::Investigating)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Severity assigned at submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportUrgency {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportUrgency {
    pub const ALL: [ReportUrgency; 4] = [
        ReportUrgency::Low,
        ReportUrgency::Medium,
        ReportUrgency::High,
        ReportUrgency::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportUrgency::Low => "low",
            ReportUrgency::Medium => "medium",
            ReportUrgency::High => "high",
            ReportUrgency::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportUrgency::Low => "Baixa",
            ReportUrgency::Medium => "Média",
            ReportUrgency::High => "Alta",
            ReportUrgency::Critical => "Crítica",
        }
    }
}

impl fmt::Display for ReportUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportUrgency {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// A filed environmental-incident report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: ReportId,
    pub report_type: ReportType,
    pub location: String,
    pub description: String,
    pub status: ReportStatus,
    pub urgency: ReportUrgency,
    pub reporter_name: Option<String>,
    pub reporter_contact: Option<String>,
    pub date: NaiveDate,
    pub last_update: NaiveDate,
}

/// Data for creating a new report
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub report_type: ReportType,
    pub location: String,
    pub description: String,
    pub urgency: ReportUrgency,
    pub reporter_name: Option<String>,
    pub reporter_contact: Option<String>,
}

impl Report {
    /// Build a freshly submitted report: status `pending`, created and updated `today`
    pub fn submitted(id: ReportId, data: CreateReport, today: NaiveDate) -> Self {
        Self {
            id,
            report_type: data.report_type,
            location: data.location,
            description: data.description,
            status: ReportStatus::default(),
            urgency: data.urgency,
            reporter_name: data.reporter_name,
            reporter_contact: data.reporter_contact,
            date: today,
            last_update: today,
        }
    }

    /// Reporter name, or the anonymous label when none was given
    pub fn reporter_display_name(&self) -> &str {
        self.reporter_name.as_deref().unwrap_or(ANONYMOUS_REPORTER)
    }

    /// Apply an externally decided status change.
    ///
    /// `last_update` never moves backwards, so it stays >= `date`.
    pub fn transition(&mut self, status: ReportStatus, on: NaiveDate) {
        self.status = status;
        self.last_update = on.max(self.last_update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_report() -> Report {
        Report::submitted(
            ReportId::new(2024, 5),
            CreateReport {
                report_type: ReportType::AirPollution,
                location: "Cubatão - SP".to_string(),
                description: "Fumaça escura saindo da chaminé.".to_string(),
                urgency: ReportUrgency::Medium,
                reporter_name: None,
                reporter_contact: None,
            },
            date(2024, 2, 1),
        )
    }

    #[test]
    fn test_report_id_format() {
        assert_eq!(ReportId::new(2024, 1).as_str(), "DEN-2024-001");
        assert_eq!(ReportId::new(2024, 42).as_str(), "DEN-2024-042");
        assert_eq!(ReportId::new(2025, 1234).as_str(), "DEN-2025-1234");
    }

    #[test]
    fn test_report_id_parts() {
        let id = ReportId::parse("DEN-2024-017").unwrap();
        assert_eq!(id.year(), 2024);
        assert_eq!(id.sequence(), 17);
    }

    #[test]
    fn test_report_id_rejects_malformed() {
        assert!(matches!(
            ReportId::parse("DEN-2024-1"),
            Err(AppError::Validation(_))
        ));
        assert!(ReportId::parse("2024-001").is_err());
        assert!(ReportId::parse("DEN-2024-99999999999").is_err());
        assert!(serde_json::from_str::<ReportId>("\"DEN-2024-4294967296\"").is_err());

        let last = ReportId::parse("DEN-2024-4294967295").unwrap();
        assert_eq!(last.sequence(), u32::MAX);
    }

    #[test]
    fn test_report_id_serde() {
        let id: ReportId = serde_json::from_str("\"DEN-2024-003\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"DEN-2024-003\"");
        assert!(serde_json::from_str::<ReportId>("\"bogus\"").is_err());
    }

    #[test]
    fn test_enum_values_match_serde() {
        for t in ReportType::ALL {
            assert_eq!(
                serde_json::to_string(&t).unwrap(),
                format!("\"{}\"", t.as_str())
            );
            assert_eq!(t.as_str().parse::<ReportType>(), Ok(t));
        }
        for s in ReportStatus::ALL {
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!("\"{}\"", s.as_str())
            );
            assert_eq!(s.as_str().parse::<ReportStatus>(), Ok(s));
        }
        for u in ReportUrgency::ALL {
            assert_eq!(
                serde_json::to_string(&u).unwrap(),
                format!("\"{}\"", u.as_str())
            );
            assert_eq!(u.as_str().parse::<ReportUrgency>(), Ok(u));
        }
    }

    #[test]
    fn test_unknown_enum_value() {
        assert_eq!(
            "archived".parse::<ReportStatus>(),
            Err(UnknownVariant("archived".to_string()))
        );
        // Labels are not machine values
        assert!("Queimadas".parse::<ReportType>().is_err());
    }

    #[test]
    fn test_submitted_report_starts_pending() {
        let report = new_report();
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.status, ReportStatus::default());
        assert_eq!(report.date, report.last_update);
        assert_eq!(report.reporter_display_name(), ANONYMOUS_REPORTER);
    }

    #[test]
    fn test_transition_keeps_last_update_monotonic() {
        let mut report = new_report();

        report.transition(ReportStatus::Investigating, date(2024, 2, 10));
        assert_eq!(report.status, ReportStatus::Investigating);
        assert_eq!(report.last_update, date(2024, 2, 10));

        // A clock running behind never moves last_update before the previous value
        report.transition(ReportStatus::Dismissed, date(2024, 1, 1));
        assert_eq!(report.status, ReportStatus::Dismissed);
        assert_eq!(report.last_update, date(2024, 2, 10));
        assert!(report.last_update >= report.date);
    }

    #[test]
    fn test_open_statuses() {
        assert!(ReportStatus::Pending.is_open());
        assert!(ReportStatus::Investigating.is_open());
        assert!(!ReportStatus::Resolved.is_open());
        assert!(!ReportStatus::Dismissed.is_open());
    }
}
