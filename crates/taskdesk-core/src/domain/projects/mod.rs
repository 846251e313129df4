//! Projects domain module
//!
//! - **Entity**: `Project`, created through `NewProject`, patched through
//!   `ProjectPatch`
//! - **Service**: `ProjectService`, owner of the project repository

pub mod entity;
pub mod service;

pub use entity::{NewProject, Project, ProjectPatch};
pub use service::ProjectService;
