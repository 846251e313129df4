//! Application validators
//!
//! Input validation for entity creation.

pub mod fields;
pub mod project_validator;
pub mod task_validator;
pub mod user_validator;

pub use fields::{
    parse_date, require_non_empty, require_non_empty_default, validate_date, validate_email,
    validate_password,
};
pub use project_validator::ProjectValidator;
pub use task_validator::TaskValidator;
pub use user_validator::UserValidator;
