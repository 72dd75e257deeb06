//! Validation and outcome classification for message mutations.
//!
//! [`MessageService`] decides for every mutation whether it succeeds, is
//! rejected as invalid, conflicts with existing data, or targets a missing
//! or inactive message. It holds no mutable state between calls; each
//! operation performs at most a lookup followed by a single mutation.
//!
//! The title uniqueness check and the subsequent write are not atomic. Two
//! concurrent creates with the same title can both pass the lookup; only a
//! storage-level constraint (reported as
//! [`MessageRepositoryError::DuplicateTitle`]) closes that gap.

use crate::message::{
    domain::{Message, MessageChanges, MessageId, NewMessage, OrganizationId},
    outcome::{INACTIVE_DELETE_MESSAGE, INACTIVE_UPDATE_MESSAGE, MessageOutcome},
    ports::{MessageRepository, MessageRepositoryError},
    validation::{
        MessageField, ValidationConfig, ValidationConfigError, ValidationErrors, validate_fields,
    },
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Request payload for creating a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    title: String,
    content: String,
}

impl CreateMessageRequest {
    /// Creates a request from raw, unvalidated input.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Request payload for replacing a message's title, content, and activity
/// flag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    title: String,
    content: String,
    is_active: bool,
}

impl UpdateMessageRequest {
    /// Creates a request from raw, unvalidated input.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, is_active: bool) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            is_active,
        }
    }
}

/// Unclassified failures raised while handling a message operation.
///
/// Business outcomes are never reported here; see [`MessageOutcome`].
#[derive(Debug, Error)]
pub enum MessageServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] MessageRepositoryError),
}

/// Result type for message service operations.
pub type MessageServiceResult<T> = Result<T, MessageServiceError>;

/// Message validation and outcome engine.
#[derive(Clone)]
pub struct MessageService<R, C>
where
    R: MessageRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: ValidationConfig,
}

impl<R, C> MessageService<R, C>
where
    R: MessageRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service using the default validation limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            config: ValidationConfig::default(),
        }
    }

    /// Replaces the validation limits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationConfigError`] when the limits are inverted or
    /// wider than the storage columns.
    pub fn with_config(
        mut self,
        config: ValidationConfig,
    ) -> Result<Self, ValidationConfigError> {
        config.check()?;
        self.config = config;
        Ok(self)
    }

    /// Returns the validation limits in use.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Returns every message of the organization.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when the lookup fails.
    pub async fn list_all(
        &self,
        organization_id: OrganizationId,
    ) -> MessageServiceResult<Vec<Message>> {
        Ok(self
            .repository
            .find_all_by_organization(organization_id)
            .await?)
    }

    /// Returns one message, or `None` when it does not exist in the
    /// organization. Inactive messages are still returned.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when the lookup fails.
    pub async fn get(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageServiceResult<Option<Message>> {
        Ok(self.repository.find_by_id(organization_id, id).await?)
    }

    /// Creates a message.
    ///
    /// Yields [`MessageOutcome::Created`], [`MessageOutcome::Conflict`], or
    /// [`MessageOutcome::ValidationError`].
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when storage fails for a
    /// reason other than a duplicate title.
    pub async fn create(
        &self,
        organization_id: OrganizationId,
        request: CreateMessageRequest,
    ) -> MessageServiceResult<MessageOutcome> {
        let CreateMessageRequest { title, content } = request;
        debug!(%organization_id, "creating message");

        if let Err(errors) = validate_fields(&title, &content, &self.config) {
            return Ok(classified(
                "create",
                organization_id,
                MessageOutcome::ValidationError(errors),
            ));
        }

        let title_holder = self
            .repository
            .find_by_title(organization_id, &title)
            .await
            .inspect_err(|err| log_fault("create", organization_id, err))?;
        if title_holder.is_some() {
            return Ok(classified(
                "create",
                organization_id,
                MessageOutcome::duplicate_title(),
            ));
        }

        let draft = NewMessage::new(organization_id, title, content, &*self.clock);
        let outcome = match self.repository.create(draft).await {
            Ok(message) => MessageOutcome::Created(message),
            Err(MessageRepositoryError::DuplicateTitle { .. }) => MessageOutcome::duplicate_title(),
            Err(err) => {
                log_fault("create", organization_id, &err);
                return Err(err.into());
            }
        };
        Ok(classified("create", organization_id, outcome))
    }

    /// Replaces the title, content, and activity flag of an active message.
    ///
    /// Yields [`MessageOutcome::Updated`], [`MessageOutcome::NotFound`],
    /// [`MessageOutcome::Conflict`], or [`MessageOutcome::ValidationError`].
    /// An inactive target is rejected before its fields are validated.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when storage fails for a
    /// reason other than a duplicate title.
    pub async fn update(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
        request: UpdateMessageRequest,
    ) -> MessageServiceResult<MessageOutcome> {
        let UpdateMessageRequest {
            title,
            content,
            is_active,
        } = request;
        debug!(%organization_id, message_id = %id, "updating message");

        let Some(mut message) = self
            .repository
            .find_by_id(organization_id, id)
            .await
            .inspect_err(|err| log_fault("update", organization_id, err))?
        else {
            return Ok(classified("update", organization_id, MessageOutcome::not_found()));
        };

        if !message.is_active() {
            let errors = ValidationErrors::single(MessageField::IsActive, INACTIVE_UPDATE_MESSAGE);
            return Ok(classified(
                "update",
                organization_id,
                MessageOutcome::ValidationError(errors),
            ));
        }

        if let Err(errors) = validate_fields(&title, &content, &self.config) {
            return Ok(classified(
                "update",
                organization_id,
                MessageOutcome::ValidationError(errors),
            ));
        }

        let title_holder = self
            .repository
            .find_by_title(organization_id, &title)
            .await
            .inspect_err(|err| log_fault("update", organization_id, err))?;
        if let Some(holder) = title_holder
            && holder.id() != id
        {
            return Ok(classified(
                "update",
                organization_id,
                MessageOutcome::duplicate_title(),
            ));
        }

        let changes = MessageChanges {
            title,
            content,
            is_active,
        };
        message.apply_changes(changes, &*self.clock);

        let outcome = match self.repository.update(&message).await {
            Ok(Some(updated)) => MessageOutcome::Updated(updated),
            Ok(None) => MessageOutcome::not_found(),
            Err(MessageRepositoryError::DuplicateTitle { .. }) => MessageOutcome::duplicate_title(),
            Err(err) => {
                log_fault("update", organization_id, &err);
                return Err(err.into());
            }
        };
        Ok(classified("update", organization_id, outcome))
    }

    /// Deletes an active message.
    ///
    /// Yields [`MessageOutcome::Deleted`], [`MessageOutcome::NotFound`], or
    /// [`MessageOutcome::ValidationError`].
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when storage fails.
    pub async fn delete(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageServiceResult<MessageOutcome> {
        debug!(%organization_id, message_id = %id, "deleting message");

        let Some(message) = self
            .repository
            .find_by_id(organization_id, id)
            .await
            .inspect_err(|err| log_fault("delete", organization_id, err))?
        else {
            return Ok(classified("delete", organization_id, MessageOutcome::not_found()));
        };

        if !message.is_active() {
            let errors = ValidationErrors::single(MessageField::IsActive, INACTIVE_DELETE_MESSAGE);
            return Ok(classified(
                "delete",
                organization_id,
                MessageOutcome::ValidationError(errors),
            ));
        }

        let removed = self
            .repository
            .delete(organization_id, id)
            .await
            .inspect_err(|err| log_fault("delete", organization_id, err))?;
        let outcome = if removed {
            MessageOutcome::Deleted
        } else {
            MessageOutcome::not_found()
        };
        Ok(classified("delete", organization_id, outcome))
    }
}

fn classified(
    operation: &'static str,
    organization_id: OrganizationId,
    outcome: MessageOutcome,
) -> MessageOutcome {
    debug!(
        operation,
        %organization_id,
        outcome = %outcome.kind(),
        "message mutation classified"
    );
    outcome
}

fn log_fault(operation: &'static str, organization_id: OrganizationId, err: &MessageRepositoryError) {
    warn!(operation, %organization_id, error = %err, "message repository failure");
}
