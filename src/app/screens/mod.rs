//! Headless screens
//!
//! Each screen owns its view state (form values, rows, field errors, loading
//! flags) and talks to the backend only through the repositories on
//! [`AppContext`]. Every call site handles its own failure with a notification;
//! the 401 redirect has already happened inside the API client.

pub mod agent_form;
pub mod agent_list;
pub mod conversation_list;
pub mod login;
pub mod pager;
pub mod profile;
pub mod register;
pub mod team_form;
pub mod team_list;

pub use agent_form::AgentForm;
pub use agent_list::AgentList;
pub use conversation_list::ConversationList;
pub use login::{sign_out, LoginScreen};
pub use pager::Pager;
pub use profile::ProfileScreen;
pub use register::RegisterScreen;
pub use team_form::TeamForm;
pub use team_list::TeamList;

use super::context::AppContext;
use crate::api::ApiError;

/// Result of a user action on a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The action completed
    Done,
    /// Blocked client-side; nothing was sent
    Rejected,
    /// The backend call failed with the shown message
    Failed(String),
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done)
    }
}

/// Create or edit, decided by whether an id was supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn from_id(id: Option<String>) -> Self {
        match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}

/// Shows the backend message (or `fallback`) and reports the failure
pub(crate) fn report(ctx: &AppContext, err: &ApiError, fallback: &str) -> Outcome {
    let message = err.user_message(fallback);
    tracing::debug!(error = %err, "action failed");
    ctx.notifier.error(&message);
    Outcome::Failed(message)
}
