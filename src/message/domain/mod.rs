//! Domain model for organization-scoped messages.
//!
//! The domain holds the message aggregate and its identifiers. It performs
//! no I/O; persistence is reached only through the repository port.

mod ids;
mod message;

pub use ids::{MessageId, OrganizationId};
pub use message::{Message, MessageChanges, NewMessage, PersistedMessageData};
