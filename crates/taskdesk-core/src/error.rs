//! Error types for Taskdesk

use thiserror::Error;

use crate::domain::EntityId;

/// Result type alias using Taskdesk's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field failed a shape, length, or format constraint
    Validation,
    /// A foreign id does not resolve to an existing entity
    Reference,
}

/// Taskdesk error types with helpful messages and suggestions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Input errors (E800-E899)
    #[error("{0}")]
    Validation(String),

    // Reference errors (E001-E099)
    #[error("Project does not exist (ID: {0})")]
    ProjectNotFound(EntityId),

    #[error("User does not exist (ID: {0})")]
    UserNotFound(EntityId),

    #[error("User {user} is not assigned to project {project}")]
    UserNotInProject { user: EntityId, project: EntityId },
}

impl Error {
    /// Create a validation error from any message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::ProjectNotFound(_) | Self::UserNotFound(_) | Self::UserNotInProject { .. } => {
                ErrorKind::Reference
            }
        }
    }

    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound(_) => "E002",
            Self::UserNotFound(_) => "E004",
            Self::UserNotInProject { .. } => "E005",
            Self::Validation(_) => "E800",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ProjectNotFound(_) => Some("Show All Projects to pick a valid project".to_string()),
            Self::UserNotFound(_) => Some("Show All Users to pick a valid user".to_string()),
            Self::UserNotInProject { project, .. } => Some(format!(
                "Assign the task to a user created under project {}",
                project
            )),
            Self::Validation(_) => None,
        }
    }
}
