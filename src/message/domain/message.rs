//! Message aggregate root and its pre-persistence draft.

use super::{MessageId, OrganizationId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Organization-scoped message aggregate root.
///
/// `id`, `organization_id`, and `created_at` are fixed once the message has
/// been persisted. Once `is_active` is false the message can still be read
/// but no longer updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: MessageId,
    organization_id: OrganizationId,
    title: String,
    content: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMessageData {
    /// Persisted message identifier.
    pub id: MessageId,
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// Persisted title.
    pub title: String,
    /// Persisted content.
    pub content: String,
    /// Persisted activity flag.
    pub is_active: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last update timestamp, if the message was ever updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Replacement values applied to an existing message by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageChanges {
    /// New title.
    pub title: String,
    /// New content.
    pub content: String,
    /// New activity flag.
    pub is_active: bool,
}

impl Message {
    /// Reconstructs a message from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedMessageData) -> Self {
        Self {
            id: data.id,
            organization_id: data.organization_id,
            title: data.title,
            content: data.content,
            is_active: data.is_active,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether the message may still be updated or deleted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp, or `None` if never updated.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replaces title, content, and activity flag in place and stamps
    /// `updated_at` with the current clock time.
    pub fn apply_changes(&mut self, changes: MessageChanges, clock: &impl Clock) {
        let MessageChanges {
            title,
            content,
            is_active,
        } = changes;
        self.title = title;
        self.content = content;
        self.is_active = is_active;
        self.updated_at = Some(clock.utc());
    }
}

/// A message that has passed validation but has not been persisted yet.
///
/// Repositories assign the identifier via [`NewMessage::into_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    organization_id: OrganizationId,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl NewMessage {
    /// Creates an active draft stamped with the current clock time.
    #[must_use]
    pub fn new(
        organization_id: OrganizationId,
        title: impl Into<String>,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            organization_id,
            title: title.into(),
            content: content.into(),
            created_at: clock.utc(),
        }
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    /// Returns the draft title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Turns the draft into a persisted message with the given identifier.
    #[must_use]
    pub fn into_message(self, id: MessageId) -> Message {
        Message {
            id,
            organization_id: self.organization_id,
            title: self.title,
            content: self.content,
            is_active: true,
            created_at: self.created_at,
            updated_at: None,
        }
    }
}
