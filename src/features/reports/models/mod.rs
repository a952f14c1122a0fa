mod report;
mod report_filter;

pub use report::{
    CreateReport, Report, ReportId, ReportStatus, ReportType, ReportUrgency, UnknownVariant,
};
pub use report_filter::{apply_filter, FieldMatch, FilterCriteria};
