//! Task validation

use super::fields::require_non_empty;
use crate::domain::EntityId;
use crate::error::{Error, Result};

/// Validator for task-related operations
pub struct TaskValidator;

impl TaskValidator {
    pub const NAME_MIN: usize = 2;
    pub const NAME_MAX: usize = 80;
    pub const DESCRIPTION_MIN: usize = 5;
    pub const DESCRIPTION_MAX: usize = 255;

    pub fn validate_name(name: &str) -> Result<()> {
        require_non_empty(name, "Task name", Self::NAME_MIN, Self::NAME_MAX)
    }

    pub fn validate_description(description: &str) -> Result<()> {
        require_non_empty(
            description,
            "Task description",
            Self::DESCRIPTION_MIN,
            Self::DESCRIPTION_MAX,
        )
    }

    /// Validate all task fields at once
    ///
    /// Only checks that both ids are set; whether they resolve is up to the
    /// task service.
    pub fn validate_create(
        name: &str,
        description: &str,
        project_id: EntityId,
        user_id: EntityId,
    ) -> Result<()> {
        Self::validate_name(name)?;
        Self::validate_description(description)?;
        if project_id.is_unset() {
            return Err(Error::validation("Project ID is required"));
        }
        if user_id.is_unset() {
            return Err(Error::validation("User ID is required"));
        }
        Ok(())
    }
}
