//! Repository port for organization-scoped message persistence.

use crate::message::domain::{Message, MessageId, NewMessage, OrganizationId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message repository operations.
pub type MessageRepositoryResult<T> = Result<T, MessageRepositoryError>;

/// Message persistence contract.
///
/// Every lookup is scoped by organization: a message is never visible
/// through an organization other than its own.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Finds a message by organization and identifier.
    ///
    /// Returns `None` when no such message exists in the organization.
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageRepositoryResult<Option<Message>>;

    /// Finds a message by organization and exact title.
    ///
    /// Titles are compared as given: case-sensitive, untrimmed.
    async fn find_by_title(
        &self,
        organization_id: OrganizationId,
        title: &str,
    ) -> MessageRepositoryResult<Option<Message>>;

    /// Returns every message belonging to the organization.
    async fn find_all_by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> MessageRepositoryResult<Vec<Message>>;

    /// Persists a draft, assigning its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::DuplicateTitle`] when the storage
    /// layer enforces title uniqueness and the title is already taken in the
    /// organization.
    async fn create(&self, draft: NewMessage) -> MessageRepositoryResult<Message>;

    /// Persists changes to an existing message.
    ///
    /// Returns `None` when the message no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::DuplicateTitle`] when the storage
    /// layer enforces title uniqueness and another message holds the title.
    async fn update(&self, message: &Message) -> MessageRepositoryResult<Option<Message>>;

    /// Removes a message.
    ///
    /// Returns `true` if and only if a message was removed.
    async fn delete(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageRepositoryResult<bool>;
}

/// Errors returned by message repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageRepositoryError {
    /// A storage-level uniqueness constraint rejected the title.
    #[error("duplicate title '{title}' in organization {organization_id}")]
    DuplicateTitle {
        /// Organization holding the conflicting title.
        organization_id: OrganizationId,
        /// The rejected title.
        title: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageRepositoryError {
    /// Creates a duplicate-title error.
    pub fn duplicate_title(organization_id: OrganizationId, title: impl Into<String>) -> Self {
        Self::DuplicateTitle {
            organization_id,
            title: title.into(),
        }
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
