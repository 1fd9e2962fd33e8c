// Conversation domain module
// Read-mostly records of team executions and their status lifecycle

#![allow(clippy::module_inception)]

pub mod conversation;
pub mod value_objects;

pub use conversation::{Conversation, ConversationSummary, NewConversation};
pub use value_objects::ConversationStatus;
