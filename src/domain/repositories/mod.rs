// Repository ports for the backend resources
// The backend owns every record; implementations live in the infrastructure layer

pub mod agent_repository;
pub mod conversation_repository;
pub mod team_repository;
pub mod user_repository;

pub use agent_repository::AgentRepository;
pub use conversation_repository::ConversationRepository;
pub use team_repository::TeamRepository;
pub use user_repository::UserRepository;

use serde::Serialize;

/// Optional `skip`/`limit` window for collection endpoints
///
/// List screens send the default (no window) and paginate client-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListParams {
    pub fn window(skip: u32, limit: u32) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }
}
