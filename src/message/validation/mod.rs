//! Field validation for message mutations.
//!
//! Validation runs before any storage lookup and reports every violated
//! field together rather than stopping at the first failure.

mod config;
mod errors;
pub mod rules;

pub use config::{
    CONTENT_COLUMN_WIDTH, TITLE_COLUMN_WIDTH, ValidationConfig, ValidationConfigError,
};
pub use errors::{MessageField, ValidationErrors};
pub use rules::{validate_content, validate_fields, validate_title};
