use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::auth::Session;

/// Screens reachable in the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    Agents,
    NewAgent,
    EditAgent(String),
    Teams,
    NewTeam,
    EditTeam(String),
    Conversations,
}

impl Route {
    /// Everything but the login and register screens needs a session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Home => "/".to_string(),
            Route::Agents => "/agents".to_string(),
            Route::NewAgent => "/agents/new".to_string(),
            Route::EditAgent(id) => format!("/agents/{}", id),
            Route::Teams => "/teams".to_string(),
            Route::NewTeam => "/teams/new".to_string(),
            Route::EditTeam(id) => format!("/teams/{}", id),
            Route::Conversations => "/conversations".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Where screens send the user next
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    /// The most recent destination, if any
    fn current(&self) -> Option<Route>;
}

/// Navigator that records every destination in order
#[derive(Debug, Default)]
pub struct History {
    visited: Mutex<Vec<Route>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for History {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "navigate");
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }

    fn current(&self) -> Option<Route> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

/// Resolves the route actually shown for a requested one
///
/// Protected routes redirect to [`Route::Login`] without a session.
pub fn guard(route: Route, session: &Session) -> Route {
    if route.requires_auth() && !session.is_authenticated() {
        tracing::debug!(requested = %route, "no session, redirecting to login");
        return Route::Login;
    }
    route
}
