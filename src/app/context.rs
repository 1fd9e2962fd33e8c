use std::sync::Arc;

use super::navigation::{Navigator, Route};
use super::notify::Notifier;
use crate::api::{ApiClient, ApiResult, UnauthorizedHook};
use crate::auth::{Session, TokenStore};
use crate::config::ClientConfig;
use crate::domain::repositories::{
    AgentRepository, ConversationRepository, TeamRepository, UserRepository,
};
use crate::infrastructure::repositories::{
    HttpAgentRepository, HttpConversationRepository, HttpTeamRepository, HttpUserRepository,
};

/// Everything a screen needs, passed explicitly instead of held globally
///
/// Cloning shares the same session, repositories, navigator and notifier.
#[derive(Clone)]
pub struct AppContext {
    pub config: ClientConfig,
    pub session: Session,
    pub users: Arc<dyn UserRepository>,
    pub agents: Arc<dyn AgentRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub conversations: Arc<dyn ConversationRepository>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Wires the HTTP repositories against the configured backend
    ///
    /// The session is restored from `store`, and every 401 redirects through
    /// `navigator` to [`Route::Login`].
    pub fn connect(
        config: ClientConfig,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> ApiResult<Self> {
        let session = Session::restore(store);

        let redirect = navigator.clone();
        let on_unauthorized: UnauthorizedHook = Arc::new(move || redirect.navigate(Route::Login));
        let client = ApiClient::new(&config, session.clone(), on_unauthorized)?;

        tracing::debug!(api_url = %client.base_url(), "application context ready");

        Ok(Self {
            config,
            session,
            users: Arc::new(HttpUserRepository::new(client.clone())),
            agents: Arc::new(HttpAgentRepository::new(client.clone())),
            teams: Arc::new(HttpTeamRepository::new(client.clone())),
            conversations: Arc::new(HttpConversationRepository::new(client)),
            navigator,
            notifier,
        })
    }
}
