//! Length limits applied to message fields.

use super::MessageField;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of the `title` column (`VARCHAR(200)`).
pub const TITLE_COLUMN_WIDTH: usize = 200;
/// Width of the `content` column (`VARCHAR(1000)`).
pub const CONTENT_COLUMN_WIDTH: usize = 1000;

const DEFAULT_MIN_TITLE_LENGTH: usize = 3;
const DEFAULT_MAX_TITLE_LENGTH: usize = TITLE_COLUMN_WIDTH;
const DEFAULT_MIN_CONTENT_LENGTH: usize = 10;
const DEFAULT_MAX_CONTENT_LENGTH: usize = CONTENT_COLUMN_WIDTH;

/// Errors raised when validation bounds cannot be honoured.
#[derive(Debug, Error)]
pub enum ValidationConfigError {
    /// The configuration document could not be parsed.
    #[error("malformed validation configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The maximum exceeds what the storage column can hold.
    #[error("{field} maximum of {max} exceeds the storage width of {width}")]
    ExceedsStorageWidth {
        /// Field whose bound is too wide.
        field: MessageField,
        /// Requested maximum.
        max: usize,
        /// Column width.
        width: usize,
    },

    /// The minimum is greater than the maximum.
    #[error("{field} minimum of {min} is greater than the maximum of {max}")]
    InvertedBounds {
        /// Field with inverted bounds.
        field: MessageField,
        /// Requested minimum.
        min: usize,
        /// Requested maximum.
        max: usize,
    },
}

/// Configuration for message field validation.
///
/// All bounds are inclusive and measured in characters. Missing keys fall
/// back to the defaults when deserializing. Maximums may not exceed
/// [`TITLE_COLUMN_WIDTH`] and [`CONTENT_COLUMN_WIDTH`]; the builders,
/// [`ValidationConfig::from_json`], and `MessageService::with_config` reject
/// wider bounds.
///
/// # Examples
///
/// ```
/// use bulletin::message::validation::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.min_title_length, 3);
/// assert_eq!(config.max_content_length, 1000);
///
/// let custom = ValidationConfig::from_json(r#"{"max_title_length": 80}"#)
///     .expect("valid configuration");
/// assert_eq!(custom.max_title_length, 80);
/// assert_eq!(custom.min_title_length, 3);
///
/// assert!(ValidationConfig::from_json(r#"{"max_title_length": 300}"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum title length.
    pub min_title_length: usize,
    /// Maximum title length.
    pub max_title_length: usize,
    /// Minimum content length.
    pub min_content_length: usize,
    /// Maximum content length.
    pub max_content_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_title_length: DEFAULT_MIN_TITLE_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl ValidationConfig {
    /// Replaces the title bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationConfigError`] when the bounds are inverted or the
    /// maximum exceeds [`TITLE_COLUMN_WIDTH`].
    pub fn with_title_bounds(
        mut self,
        min: usize,
        max: usize,
    ) -> Result<Self, ValidationConfigError> {
        self.min_title_length = min;
        self.max_title_length = max;
        self.check()?;
        Ok(self)
    }

    /// Replaces the content bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationConfigError`] when the bounds are inverted or the
    /// maximum exceeds [`CONTENT_COLUMN_WIDTH`].
    pub fn with_content_bounds(
        mut self,
        min: usize,
        max: usize,
    ) -> Result<Self, ValidationConfigError> {
        self.min_content_length = min;
        self.max_content_length = max;
        self.check()?;
        Ok(self)
    }

    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationConfigError::Malformed`] when the document is
    /// malformed or a bound is not a non-negative integer, and the other
    /// variants when the parsed bounds fail [`ValidationConfig::check`].
    pub fn from_json(document: &str) -> Result<Self, ValidationConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.check()?;
        Ok(config)
    }

    /// Checks that every bound pair is ordered and fits its storage column.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationConfigError::InvertedBounds`] or
    /// [`ValidationConfigError::ExceedsStorageWidth`] for the first field
    /// that fails.
    pub fn check(&self) -> Result<(), ValidationConfigError> {
        check_bounds(
            MessageField::Title,
            self.min_title_length,
            self.max_title_length,
            TITLE_COLUMN_WIDTH,
        )?;
        check_bounds(
            MessageField::Content,
            self.min_content_length,
            self.max_content_length,
            CONTENT_COLUMN_WIDTH,
        )
    }
}

const fn check_bounds(
    field: MessageField,
    min: usize,
    max: usize,
    width: usize,
) -> Result<(), ValidationConfigError> {
    if min > max {
        return Err(ValidationConfigError::InvertedBounds { field, min, max });
    }
    if max > width {
        return Err(ValidationConfigError::ExceedsStorageWidth { field, max, width });
    }
    Ok(())
}
