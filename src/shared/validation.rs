use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating report identifiers
    /// Prefix, four digit year and a zero-padded sequence of at least three digits
    /// - Valid: "DEN-2024-001", "DEN-2025-1234"
    /// - Invalid: "DEN-24-001", "den-2024-001", "DEN-2024-01", "RPT-2024-001"
    pub static ref REPORT_ID_REGEX: Regex = Regex::new(r"^DEN-(\d{4})-(\d{3,})$").unwrap();
}

/// Rejects strings that are empty or contain only whitespace
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Turns an optional free-text field into `None` when it carries no content
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
