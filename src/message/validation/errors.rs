//! Field-keyed validation failures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Message field that a validation failure refers to.
///
/// Serializes as the field names exposed to API callers (`"Title"`,
/// `"Content"`, `"IsActive"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageField {
    /// The message title.
    Title,
    /// The message body.
    Content,
    /// The activity flag; used when the target's state forbids a mutation.
    IsActive,
}

impl MessageField {
    /// Returns the external field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Content => "Content",
            Self::IsActive => "IsActive",
        }
    }
}

impl fmt::Display for MessageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from field to the list of rule violations for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<MessageField, Vec<String>>);

impl ValidationErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates an error set holding one violation.
    #[must_use]
    pub fn single(field: MessageField, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records a violation against a field.
    pub fn add(&mut self, field: MessageField, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Returns `true` when no violation has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields with at least one violation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the field has at least one violation.
    #[must_use]
    pub fn contains(&self, field: MessageField) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns the violations recorded for a field.
    #[must_use]
    pub fn get(&self, field: MessageField) -> Option<&[String]> {
        self.0.get(&field).map(Vec::as_slice)
    }

    /// Iterates over fields and their violations in field order.
    pub fn iter(&self) -> impl Iterator<Item = (MessageField, &[String])> {
        self.0.iter().map(|(field, messages)| (*field, messages.as_slice()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}
