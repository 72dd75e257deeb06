//! In-memory repository for message storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::message::{
    domain::{Message, MessageId, NewMessage, OrganizationId},
    ports::{MessageRepository, MessageRepositoryError, MessageRepositoryResult},
};

/// Thread-safe in-memory message repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageRepository {
    state: Arc<RwLock<InMemoryMessageState>>,
}

#[derive(Debug, Default)]
struct InMemoryMessageState {
    messages: HashMap<MessageId, Message>,
    title_index: HashMap<(OrganizationId, String), MessageId>,
}

impl InMemoryMessageRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fully-formed message, bypassing draft creation.
    ///
    /// Seeds test fixtures such as inactive messages that the service cannot
    /// produce directly.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::DuplicateTitle`] when the title is
    /// already taken in the message's organization.
    #[cfg(test)]
    pub(crate) fn insert(&self, message: Message) -> MessageRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let key = title_key(message.organization_id(), message.title());
        if state.title_index.contains_key(&key) {
            return Err(MessageRepositoryError::duplicate_title(
                message.organization_id(),
                message.title(),
            ));
        }
        state.title_index.insert(key, message.id());
        state.messages.insert(message.id(), message);
        Ok(())
    }
}

fn title_key(organization_id: OrganizationId, title: &str) -> (OrganizationId, String) {
    (organization_id, title.to_owned())
}

/// Returns the stored message only if it belongs to the organization.
fn scoped<'a>(
    state: &'a InMemoryMessageState,
    organization_id: OrganizationId,
    id: MessageId,
) -> Option<&'a Message> {
    state
        .messages
        .get(&id)
        .filter(|message| message.organization_id() == organization_id)
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageRepositoryResult<Option<Message>> {
        let state = self.state.read().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(scoped(&state, organization_id, id).cloned())
    }

    async fn find_by_title(
        &self,
        organization_id: OrganizationId,
        title: &str,
    ) -> MessageRepositoryResult<Option<Message>> {
        let state = self.state.read().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let message = state
            .title_index
            .get(&title_key(organization_id, title))
            .and_then(|id| state.messages.get(id))
            .cloned();
        Ok(message)
    }

    async fn find_all_by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> MessageRepositoryResult<Vec<Message>> {
        let state = self.state.read().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut messages: Vec<Message> = state
            .messages
            .values()
            .filter(|message| message.organization_id() == organization_id)
            .cloned()
            .collect();
        messages.sort_by_key(|message| (message.created_at(), message.id()));
        Ok(messages)
    }

    async fn create(&self, draft: NewMessage) -> MessageRepositoryResult<Message> {
        let mut state = self.state.write().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let key = title_key(draft.organization_id(), draft.title());
        if state.title_index.contains_key(&key) {
            return Err(MessageRepositoryError::duplicate_title(
                draft.organization_id(),
                draft.title(),
            ));
        }

        let message = draft.into_message(MessageId::new());
        state.title_index.insert(key, message.id());
        state.messages.insert(message.id(), message.clone());
        Ok(message)
    }

    async fn update(&self, message: &Message) -> MessageRepositoryResult<Option<Message>> {
        let mut state = self.state.write().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let Some(old_title) = scoped(&state, message.organization_id(), message.id())
            .map(|stored| stored.title().to_owned())
        else {
            return Ok(None);
        };

        if old_title != message.title() {
            let new_key = title_key(message.organization_id(), message.title());
            if let Some(&holder) = state.title_index.get(&new_key)
                && holder != message.id()
            {
                return Err(MessageRepositoryError::duplicate_title(
                    message.organization_id(),
                    message.title(),
                ));
            }
            state
                .title_index
                .remove(&title_key(message.organization_id(), &old_title));
            state.title_index.insert(new_key, message.id());
        }

        state.messages.insert(message.id(), message.clone());
        Ok(Some(message.clone()))
    }

    async fn delete(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let Some(title) = scoped(&state, organization_id, id).map(|m| m.title().to_owned()) else {
            return Ok(false);
        };

        state.title_index.remove(&title_key(organization_id, &title));
        state.messages.remove(&id);
        Ok(true)
    }
}
