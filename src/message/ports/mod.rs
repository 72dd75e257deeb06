//! Port contracts for message persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by message services.

pub mod repository;

pub use repository::{MessageRepository, MessageRepositoryError, MessageRepositoryResult};
