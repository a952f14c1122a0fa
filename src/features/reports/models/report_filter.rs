//! Report filtering for the list view.
//!
//! All active criteria combine with logical AND and the result keeps the
//! input order. Filtering never fails: a value outside an enumeration just
//! matches nothing.

use std::str::FromStr;

use super::report::{Report, ReportStatus, ReportUrgency};
use crate::shared::constants::FILTER_ALL;

/// Constraint on a single enumerated field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldMatch<T> {
    /// No constraint
    #[default]
    Any,
    /// Field must equal this value
    Is(T),
    /// Requested value is not part of the enumeration; nothing matches
    Unrecognized(String),
}

impl<T: FromStr + PartialEq> FieldMatch<T> {
    /// Interpret a raw query value. Absent, empty and `"all"` mean no constraint.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match active_value(raw) {
            None => FieldMatch::Any,
            Some(value) => value
                .parse()
                .map(FieldMatch::Is)
                .unwrap_or_else(|_| FieldMatch::Unrecognized(value.to_string())),
        }
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            FieldMatch::Any => true,
            FieldMatch::Is(expected) => expected == value,
            FieldMatch::Unrecognized(_) => false,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, FieldMatch::Any)
    }
}

/// Active filter constraints for a report collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-sensitive substring of the type's display label
    pub report_type: Option<String>,
    pub status: FieldMatch<ReportStatus>,
    pub urgency: FieldMatch<ReportUrgency>,
    /// Case-insensitive substring of location, description or id
    pub search: Option<String>,
}

impl FilterCriteria {
    /// Build criteria from raw query strings, treating `""` and `"all"` as absent
    pub fn from_raw(
        report_type: Option<&str>,
        status: Option<&str>,
        urgency: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        Self {
            report_type: active_value(report_type).map(str::to_string),
            status: FieldMatch::from_raw(status),
            urgency: FieldMatch::from_raw(urgency),
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.report_type.is_none()
            && self.status.is_any()
            && self.urgency.is_any()
            && self.search.is_none()
    }

    pub fn matches(&self, report: &Report) -> bool {
        let type_ok = self
            .report_type
            .as_deref()
            .map_or(true, |t| report.report_type.label().contains(t));

        let search_ok = self.search.as_deref().map_or(true, |s| {
            let needle = s.to_lowercase();
            report.location.to_lowercase().contains(&needle)
                || report.description.to_lowercase().contains(&needle)
                || report.id.as_str().to_lowercase().contains(&needle)
        });

        type_ok
            && self.status.matches(&report.status)
            && self.urgency.matches(&report.urgency)
            && search_ok
    }
}

/// Ordered subsequence of `reports` satisfying every active criterion
pub fn apply_filter(reports: &[Report], criteria: &FilterCriteria) -> Vec<Report> {
    reports
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

fn active_value(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| !v.is_empty() && *v != FILTER_ALL)
}
