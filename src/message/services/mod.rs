//! Application services for organization-scoped message management.

mod engine;

pub use engine::{
    CreateMessageRequest, MessageService, MessageServiceError, MessageServiceResult,
    UpdateMessageRequest,
};
