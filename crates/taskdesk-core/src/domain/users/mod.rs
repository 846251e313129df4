//! Users domain module

pub mod entity;
pub mod service;

pub use entity::{NewUser, User, UserPatch};
pub use service::UserService;
