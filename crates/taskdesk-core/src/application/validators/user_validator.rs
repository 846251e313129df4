//! User validation

use super::fields::{self, require_non_empty};
use crate::domain::EntityId;
use crate::error::{Error, Result};

/// Validator for user-related operations
pub struct UserValidator;

impl UserValidator {
    pub const USERNAME_MIN: usize = 3;
    pub const USERNAME_MAX: usize = 30;

    pub fn validate_username(username: &str) -> Result<()> {
        require_non_empty(username, "Username", Self::USERNAME_MIN, Self::USERNAME_MAX)
    }

    pub fn validate_email(email: &str) -> Result<()> {
        fields::validate_email(email)
    }

    /// A user must name the project it belongs to
    pub fn validate_project_id(project_id: EntityId) -> Result<()> {
        if project_id.is_unset() {
            return Err(Error::validation("Project ID required for user"));
        }
        Ok(())
    }

    /// Validate all user fields at once
    pub fn validate_create(username: &str, email: &str, project_id: EntityId) -> Result<()> {
        Self::validate_username(username)?;
        Self::validate_email(email)?;
        Self::validate_project_id(project_id)?;
        Ok(())
    }
}
