//! Project validation
//!
//! Validates project-related inputs.

use chrono::NaiveDate;

use super::fields::{parse_date, require_non_empty};
use crate::error::Result;

/// Validator for project-related operations
pub struct ProjectValidator;

impl ProjectValidator {
    pub const NAME_MIN: usize = 2;
    pub const NAME_MAX: usize = 60;
    pub const DESCRIPTION_MIN: usize = 5;
    pub const DESCRIPTION_MAX: usize = 255;

    /// Validate a project name
    ///
    /// Rules:
    /// - Between 2 and 60 characters after trimming
    pub fn validate_name(name: &str) -> Result<()> {
        require_non_empty(name, "Project name", Self::NAME_MIN, Self::NAME_MAX)
    }

    /// Validate a project description
    ///
    /// Rules:
    /// - Between 5 and 255 characters after trimming
    pub fn validate_description(description: &str) -> Result<()> {
        require_non_empty(
            description,
            "Project description",
            Self::DESCRIPTION_MIN,
            Self::DESCRIPTION_MAX,
        )
    }

    /// Validate all project fields at once, returning the parsed start date
    pub fn validate_create(name: &str, description: &str, start_date: &str) -> Result<NaiveDate> {
        Self::validate_name(name)?;
        Self::validate_description(description)?;
        parse_date(start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(ProjectValidator::validate_name("Website Revamp").is_ok());
        assert!(ProjectValidator::validate_name("ab").is_ok());
        assert!(ProjectValidator::validate_name(&"a".repeat(60)).is_ok());

        assert!(ProjectValidator::validate_name("a").is_err());
        assert!(ProjectValidator::validate_name(" a ").is_err());
        assert!(ProjectValidator::validate_name(&"a".repeat(61)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(ProjectValidator::validate_description("Redesign the site").is_ok());
        assert!(ProjectValidator::validate_description("four").is_err());
        assert!(ProjectValidator::validate_description(&"d".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_create_first_failure_wins() {
        let err = ProjectValidator::validate_create("a", "x", "bad").unwrap_err();
        assert!(err.to_string().starts_with("Project name"));

        let err = ProjectValidator::validate_create("ok name", "x", "bad").unwrap_err();
        assert!(err.to_string().starts_with("Project description"));

        let err =
            ProjectValidator::validate_create("ok name", "long enough", "bad").unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_validate_create_returns_date() {
        let date = ProjectValidator::validate_create("Site", "Build it now", "2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }
}
