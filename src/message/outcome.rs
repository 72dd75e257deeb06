//! Classified results of message mutations.
//!
//! Every mutation handled by [`MessageService`](crate::message::services::MessageService)
//! returns exactly one [`MessageOutcome`]. Transport layers map the variant
//! to a response and must not re-derive the classification from entity
//! state.

use crate::message::{domain::Message, validation::ValidationErrors};
use std::fmt;

/// Text carried by [`MessageOutcome::NotFound`].
pub const NOT_FOUND_MESSAGE: &str = "Message not found.";

/// Text carried by [`MessageOutcome::Conflict`] for duplicate titles.
pub const DUPLICATE_TITLE_MESSAGE: &str = "A message with the same title already exists.";

/// Violation recorded against `IsActive` when updating an inactive message.
pub const INACTIVE_UPDATE_MESSAGE: &str = "Cannot update inactive message.";

/// Violation recorded against `IsActive` when deleting an inactive message.
pub const INACTIVE_DELETE_MESSAGE: &str = "Cannot delete inactive message.";

/// Business outcome of a message mutation.
///
/// Storage faults are not outcomes; they surface as
/// [`MessageServiceError`](crate::message::services::MessageServiceError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    /// A new message was persisted.
    Created(Message),
    /// An existing message was modified in place.
    Updated(Message),
    /// The message was removed.
    Deleted,
    /// The target does not exist in the organization scope.
    NotFound(String),
    /// A uniqueness rule was violated.
    Conflict(String),
    /// One or more fields failed validation, or the target's state forbids
    /// the mutation.
    ValidationError(ValidationErrors),
}

impl MessageOutcome {
    /// Builds the canonical not-found outcome.
    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound(NOT_FOUND_MESSAGE.to_owned())
    }

    /// Builds the canonical duplicate-title outcome.
    #[must_use]
    pub fn duplicate_title() -> Self {
        Self::Conflict(DUPLICATE_TITLE_MESSAGE.to_owned())
    }

    /// Returns the classification tag of this outcome.
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Created(_) => OutcomeKind::Created,
            Self::Updated(_) => OutcomeKind::Updated,
            Self::Deleted => OutcomeKind::Deleted,
            Self::NotFound(_) => OutcomeKind::NotFound,
            Self::Conflict(_) => OutcomeKind::Conflict,
            Self::ValidationError(_) => OutcomeKind::ValidationError,
        }
    }

    /// Returns `true` for outcomes where the mutation took effect.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.kind().is_success()
    }
}

/// Payload-free classification of a [`MessageOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// See [`MessageOutcome::Created`].
    Created,
    /// See [`MessageOutcome::Updated`].
    Updated,
    /// See [`MessageOutcome::Deleted`].
    Deleted,
    /// See [`MessageOutcome::NotFound`].
    NotFound,
    /// See [`MessageOutcome::Conflict`].
    Conflict,
    /// See [`MessageOutcome::ValidationError`].
    ValidationError,
}

impl OutcomeKind {
    /// Returns the snake-case name used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::ValidationError => "validation_error",
        }
    }

    /// Returns `true` for classifications where the mutation took effect.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Created | Self::Updated | Self::Deleted)
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
