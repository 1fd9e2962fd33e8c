use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::ConversationStatus;
use crate::domain::errors::FieldErrors;

/// A recorded execution of a team against a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub user_id: String,
    pub team_id: String,
    pub task: String,
    pub status: ConversationStatus,
    #[serde(default, with = "crate::domain::time::option")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::domain::time::option")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(with = "crate::domain::time")]
    pub created_at: DateTime<Utc>,
}

/// Row of the conversation listing (the backend omits `user_id` here)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub task: String,
    pub team_id: String,
    pub status: ConversationStatus,
    #[serde(with = "crate::domain::time")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::domain::time::option")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::domain::time::option")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Body of `POST /conversations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewConversation {
    pub team_id: String,
    pub task: String,
}

impl NewConversation {
    /// Validates a team + task submission
    pub fn new(team_id: impl Into<String>, task: impl Into<String>) -> Result<Self, FieldErrors> {
        let team_id = team_id.into().trim().to_string();
        let task = task.into();
        let mut errors = FieldErrors::new();

        if team_id.is_empty() {
            errors.push("team_id", "Select a team");
        }
        if task.trim().is_empty() {
            errors.push("task", "Task is required");
        }

        errors.into_result(Self { team_id, task })
    }
}
