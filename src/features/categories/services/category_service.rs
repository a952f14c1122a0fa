use std::str::FromStr;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::reports::models::ReportType;

/// Service for report category lookups
///
/// Categories are the closed `ReportType` enumeration, so nothing is stored.
#[derive(Debug, Default)]
pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        Self
    }

    /// List all categories in declaration order
    pub fn list(&self) -> Vec<CategoryResponseDto> {
        ReportType::ALL.into_iter().map(Into::into).collect()
    }

    /// Get category by machine value, e.g. `illegal_disposal`
    pub fn get_by_value(&self, value: &str) -> Result<CategoryResponseDto> {
        ReportType::from_str(value)
            .map(Into::into)
            .map_err(|_| AppError::NotFound(format!("Category '{}' not found", value)))
    }
}
