use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use super::token_store::TokenStore;
use crate::domain::user::User;

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// Authentication state shared by the API client and the screens
///
/// Cloning is cheap and every clone observes the same state. Writes are last
/// write wins.
///
/// # Invariants
/// - `is_authenticated()` is true iff a token is held
/// - A user profile is only held alongside a token
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Initializes the session from whatever token the durable store holds
    pub fn restore(store: Arc<dyn TokenStore>) -> Self {
        let token = store.load().filter(|t| !t.trim().is_empty());
        if token.is_some() {
            tracing::info!("restored persisted session token");
        }

        Self {
            state: Arc::new(RwLock::new(SessionState { token, user: None })),
            store,
        }
    }

    /// Stores the token in memory and durably
    ///
    /// A failing durable write is logged; the in-memory session still holds the token.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        if let Err(e) = self.store.save(&token) {
            tracing::warn!(error = %e, "failed to persist session token");
        }
        self.write().token = Some(token);
    }

    /// Stores the profile in memory only
    ///
    /// Ignored while no token is held.
    pub fn set_user(&self, user: User) {
        let mut state = self.write();
        if state.token.is_none() {
            tracing::warn!(user_id = %user.id, "ignoring profile for an unauthenticated session");
            return;
        }
        state.user = Some(user);
    }

    /// Clears token and profile, and removes the durable copy
    pub fn logout(&self) {
        {
            let mut state = self.write();
            state.token = None;
            state.user = None;
        }
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to remove persisted session token");
        }
        tracing::info!("session cleared");
    }

    /// Presence check only; the token's signature and expiry are not inspected
    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("Session")
            .field("authenticated", &state.token.is_some())
            .field("user", &state.user.as_ref().map(|u| u.id.as_str()))
            .finish()
    }
}
