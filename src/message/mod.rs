//! Organization-scoped message management.
//!
//! This module decides, for every message mutation, whether it succeeds, is
//! rejected as invalid, conflicts with an existing title, or targets a
//! missing or inactive message. The decision is returned as a
//! [`outcome::MessageOutcome`] that transport layers map to responses.
//!
//! # Architecture
//!
//! - **Domain**: [`domain::Message`] and its identifiers
//! - **Validation**: field rules and [`validation::ValidationConfig`]
//! - **Outcome**: the closed set of mutation results
//! - **Ports**: [`ports::MessageRepository`], the storage contract
//! - **Adapters**: [`adapters::memory::InMemoryMessageRepository`] and
//!   [`adapters::postgres::PostgresMessageRepository`]
//! - **Services**: [`services::MessageService`], the orchestration engine
//!
//! # Example
//!
//! ```
//! use bulletin::message::{
//!     adapters::memory::InMemoryMessageRepository,
//!     domain::OrganizationId,
//!     outcome::MessageOutcome,
//!     services::{CreateMessageRequest, MessageService},
//! };
//! use mockable::DefaultClock;
//! use std::sync::Arc;
//!
//! # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
//! let service = MessageService::new(
//!     Arc::new(InMemoryMessageRepository::new()),
//!     Arc::new(DefaultClock),
//! );
//! let organization_id = OrganizationId::new();
//!
//! let outcome = service
//!     .create(organization_id, CreateMessageRequest::new("Hello", "0123456789"))
//!     .await
//!     .expect("storage available");
//! assert!(matches!(outcome, MessageOutcome::Created(_)));
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod outcome;
pub mod ports;
pub mod services;
pub mod validation;
