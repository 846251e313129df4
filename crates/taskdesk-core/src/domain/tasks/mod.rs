//! Tasks domain module

pub mod entity;
pub mod service;

pub use entity::{NewTask, Task, TaskPatch, TaskStatus};
pub use service::TaskService;
