//! Bulletin: organization-scoped message management.
//!
//! This crate lets an organization create, read, update, delete, and
//! deactivate short titled messages. Titles are unique per organization.
//! Every mutation reports a classified [`message::outcome::MessageOutcome`].
//!
//! # Architecture
//!
//! Bulletin follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`message`]: Message domain, validation, outcomes, and service
pub mod message;
