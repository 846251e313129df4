//! Domain layer
//!
//! Contains the entity model, the generic repository, and the services that
//! own one repository per entity type.

pub mod entity;
pub mod projects;
pub mod repository;
pub mod tasks;
pub mod users;

pub use entity::{Entity, EntityId};
pub use repository::Repository;
