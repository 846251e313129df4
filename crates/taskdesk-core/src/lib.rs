//! Taskdesk Core Library
//!
//! This crate provides the core functionality for Taskdesk, including:
//! - A generic in-memory repository for entities with identity and timestamps
//! - Project, user, and task services with referential checks
//! - Field validation (lengths, email, dates, passwords)
//! - Configuration with file persistence

pub mod application;
pub mod config;
pub mod domain;
pub mod error;

pub use application::TaskManager;
pub use error::{Error, ErrorKind, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::application::TaskManager;
    pub use crate::config::Config;
    pub use crate::domain::{Entity, EntityId, Repository};
    pub use crate::domain::projects::{Project, ProjectService};
    pub use crate::domain::tasks::{Task, TaskService, TaskStatus};
    pub use crate::domain::users::{User, UserService};
    pub use crate::error::{Error, ErrorKind, Result};
}
