//! `PostgreSQL` adapter for message persistence.
//!
//! The `messages` table carries a unique index on
//! `(organization_id, title)`, so duplicate titles that slip past the
//! service's lookup are still rejected at write time.

mod models;
mod repository;
mod schema;

pub use models::{MessageRow, NewMessageRow};
pub use repository::{MessagePgPool, PostgresMessageRepository, row_to_message, to_new_row};
