//! Persistence adapters for the message module.
//!
//! - [`memory::InMemoryMessageRepository`]: thread-safe in-memory storage
//!   for tests and embedding
//! - [`postgres::PostgresMessageRepository`]: `PostgreSQL` persistence using
//!   Diesel ORM
//!
//! Both adapters enforce title uniqueness per organization at the storage
//! boundary and report violations as
//! [`MessageRepositoryError::DuplicateTitle`](crate::message::ports::MessageRepositoryError::DuplicateTitle).

pub mod memory;
pub mod postgres;
