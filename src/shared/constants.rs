/// Prefix of every report identifier (`DEN-YYYY-NNN`)
pub const REPORT_ID_PREFIX: &str = "DEN";

/// Minimum number of digits in the sequence part of a report identifier
pub const REPORT_SEQUENCE_WIDTH: usize = 3;

/// Display name used when a report was filed without a reporter name
pub const ANONYMOUS_REPORTER: &str = "Anônimo";

/// Filter value meaning "no constraint on this field"
pub const FILTER_ALL: &str = "all";

// =============================================================================
// SUBMISSION LIMITS
// =============================================================================

pub const MAX_LOCATION_LENGTH: u64 = 500;

pub const MAX_DESCRIPTION_LENGTH: u64 = 5000;

pub const MAX_REPORTER_FIELD_LENGTH: u64 = 255;
