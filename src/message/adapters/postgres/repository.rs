//! `PostgreSQL` repository implementation for messages.

use super::{
    models::{MessageRow, NewMessageRow},
    schema::messages,
};
use crate::message::{
    domain::{Message, MessageId, NewMessage, OrganizationId, PersistedMessageData},
    ports::{MessageRepository, MessageRepositoryError, MessageRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the message adapter.
pub type MessagePgPool = Pool<ConnectionManager<PgConnection>>;

/// Name of the unique index guarding titles per organization.
const TITLE_UNIQUE_INDEX: &str = "idx_messages_organization_title";

/// `PostgreSQL`-backed message repository.
#[derive(Debug, Clone)]
pub struct PostgresMessageRepository {
    pool: MessagePgPool,
}

impl PostgresMessageRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: MessagePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> MessageRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> MessageRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(MessageRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(MessageRepositoryError::persistence)?
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageRepositoryResult<Option<Message>> {
        self.run_blocking(move |connection| {
            let row = messages::table
                .filter(messages::id.eq(id.into_inner()))
                .filter(messages::organization_id.eq(organization_id.into_inner()))
                .select(MessageRow::as_select())
                .first::<MessageRow>(connection)
                .optional()
                .map_err(MessageRepositoryError::persistence)?;
            Ok(row.map(row_to_message))
        })
        .await
    }

    async fn find_by_title(
        &self,
        organization_id: OrganizationId,
        title: &str,
    ) -> MessageRepositoryResult<Option<Message>> {
        let title_val = title.to_owned();
        self.run_blocking(move |connection| {
            let row = messages::table
                .filter(messages::organization_id.eq(organization_id.into_inner()))
                .filter(messages::title.eq(&title_val))
                .select(MessageRow::as_select())
                .first::<MessageRow>(connection)
                .optional()
                .map_err(MessageRepositoryError::persistence)?;
            Ok(row.map(row_to_message))
        })
        .await
    }

    async fn find_all_by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> MessageRepositoryResult<Vec<Message>> {
        self.run_blocking(move |connection| {
            let rows = messages::table
                .filter(messages::organization_id.eq(organization_id.into_inner()))
                .order((messages::created_at.asc(), messages::id.asc()))
                .select(MessageRow::as_select())
                .load::<MessageRow>(connection)
                .map_err(MessageRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_message).collect())
        })
        .await
    }

    async fn create(&self, draft: NewMessage) -> MessageRepositoryResult<Message> {
        let new_row = to_new_row(&draft, MessageId::new());
        let organization_id = draft.organization_id();

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(messages::table)
                .values(&new_row)
                .returning(MessageRow::as_returning())
                .get_result::<MessageRow>(connection)
                .map_err(|err| map_write_error(err, organization_id, &new_row.title))?;
            Ok(row_to_message(row))
        })
        .await
    }

    async fn update(&self, message: &Message) -> MessageRepositoryResult<Option<Message>> {
        let id_val = message.id().into_inner();
        let organization_id = message.organization_id();
        let title_val = message.title().to_owned();
        let content_val = message.content().to_owned();
        let is_active_val = message.is_active();
        let updated_val = message.updated_at();

        self.run_blocking(move |connection| {
            let row = diesel::update(
                messages::table
                    .filter(messages::id.eq(id_val))
                    .filter(messages::organization_id.eq(organization_id.into_inner())),
            )
            .set((
                messages::title.eq(&title_val),
                messages::content.eq(&content_val),
                messages::is_active.eq(is_active_val),
                messages::updated_at.eq(updated_val),
            ))
            .returning(MessageRow::as_returning())
            .get_result::<MessageRow>(connection)
            .optional()
            .map_err(|err| map_write_error(err, organization_id, &title_val))?;
            Ok(row.map(row_to_message))
        })
        .await
    }

    async fn delete(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(
                messages::table
                    .filter(messages::id.eq(id.into_inner()))
                    .filter(messages::organization_id.eq(organization_id.into_inner())),
            )
            .execute(connection)
            .map_err(MessageRepositoryError::persistence)?;
            Ok(deleted_count > 0)
        })
        .await
    }
}

/// Builds the insert row for a draft with the assigned identifier.
#[must_use]
pub fn to_new_row(draft: &NewMessage, id: MessageId) -> NewMessageRow {
    NewMessageRow {
        id: id.into_inner(),
        organization_id: draft.organization_id().into_inner(),
        title: draft.title().to_owned(),
        content: draft.content().to_owned(),
        is_active: true,
        created_at: draft.created_at(),
    }
}

/// Converts a stored row into the domain aggregate.
#[must_use]
pub fn row_to_message(row: MessageRow) -> Message {
    let MessageRow {
        id,
        organization_id,
        title,
        content,
        is_active,
        created_at,
        updated_at,
    } = row;

    Message::from_persisted(PersistedMessageData {
        id: MessageId::from_uuid(id),
        organization_id: OrganizationId::from_uuid(organization_id),
        title,
        content,
        is_active,
        created_at,
        updated_at,
    })
}

fn map_write_error(
    err: DieselError,
    organization_id: OrganizationId,
    title: &str,
) -> MessageRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_title_unique_violation(info.as_ref()) =>
        {
            MessageRepositoryError::duplicate_title(organization_id, title)
        }
        _ => MessageRepositoryError::persistence(err),
    }
}

fn is_title_unique_violation(info: &dyn diesel::result::DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == TITLE_UNIQUE_INDEX)
}
