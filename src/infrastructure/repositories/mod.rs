// Repository implementations (backend access over HTTP)
// Adapters that implement domain repository interfaces on top of ApiClient

pub mod http_agent_repository;
pub mod http_conversation_repository;
pub mod http_team_repository;
pub mod http_user_repository;

pub use http_agent_repository::HttpAgentRepository;
pub use http_conversation_repository::HttpConversationRepository;
pub use http_team_repository::HttpTeamRepository;
pub use http_user_repository::HttpUserRepository;
