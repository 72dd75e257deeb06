//! Individual field rules.
//!
//! Each rule is a pure function returning the violation message on failure.
//! Values are checked as given: nothing is trimmed or normalized.

use super::{MessageField, ValidationConfig, ValidationErrors};

/// Validates a title against the configured bounds.
///
/// # Errors
///
/// Returns the violation message when the title is empty, whitespace-only,
/// or its character count falls outside the configured bounds.
pub fn validate_title(title: &str, config: &ValidationConfig) -> Result<(), String> {
    if is_within_bounds(title, config.min_title_length, config.max_title_length) {
        return Ok(());
    }
    Err(format!(
        "Title is required and must be between {} and {} characters.",
        config.min_title_length, config.max_title_length
    ))
}

/// Validates message content against the configured bounds.
///
/// # Errors
///
/// Returns the violation message when the content is empty,
/// whitespace-only, or its character count falls outside the configured
/// bounds.
pub fn validate_content(content: &str, config: &ValidationConfig) -> Result<(), String> {
    if is_within_bounds(content, config.min_content_length, config.max_content_length) {
        return Ok(());
    }
    Err(format!(
        "Content must be between {} and {} characters.",
        config.min_content_length, config.max_content_length
    ))
}

/// Validates title and content together, collecting every violation.
///
/// # Errors
///
/// Returns [`ValidationErrors`] with a `Title` and/or `Content` entry when
/// either rule fails.
pub fn validate_fields(
    title: &str,
    content: &str,
    config: &ValidationConfig,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(message) = validate_title(title, config) {
        errors.add(MessageField::Title, message);
    }

    if let Err(message) = validate_content(content, config) {
        errors.add(MessageField::Content, message);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_within_bounds(value: &str, min: usize, max: usize) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    let char_count = value.chars().count();
    (min..=max).contains(&char_count)
}
