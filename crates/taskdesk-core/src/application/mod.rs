//! Application service layer
//!
//! Input validation and the `TaskManager` facade that front-ends drive.

pub mod manager;
pub mod validators;

pub use manager::TaskManager;
