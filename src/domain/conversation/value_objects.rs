use serde::{Deserialize, Serialize};

/// Lifecycle status of a conversation, driven by the backend
///
/// # Status Transitions
/// ```text
/// Pending -> Running -> Completed
///    |          |-----> Failed
///    |          +-----> Cancelled
///    +----------------> Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    /// Created, not yet picked up by the team
    Pending,
    /// The team is executing the task
    Running,
    /// Finished successfully
    Completed,
    /// Execution failed
    Failed,
    /// Cancelled on request
    Cancelled,
}

impl ConversationStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Example
    /// ```
    /// use agentput_admin::domain::conversation::ConversationStatus;
    ///
    /// assert!(ConversationStatus::Pending.can_transition_to(ConversationStatus::Running));
    /// assert!(!ConversationStatus::Completed.can_transition_to(ConversationStatus::Running));
    /// ```
    pub fn can_transition_to(&self, next: ConversationStatus) -> bool {
        use ConversationStatus::*;
        matches!(
            (self, next),
            (Pending, Running)
                | (Pending, Cancelled)
                | (Running, Completed)
                | (Running, Failed)
                | (Running, Cancelled)
        )
    }

    /// No further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ConversationStatus::Completed | ConversationStatus::Failed | ConversationStatus::Cancelled
        )
    }

    /// A cancel request is meaningful only while the conversation can still move to Cancelled
    pub fn is_cancellable(&self) -> bool {
        self.can_transition_to(ConversationStatus::Cancelled)
    }
}

impl std::fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversationStatus::Pending => write!(f, "pending"),
            ConversationStatus::Running => write!(f, "running"),
            ConversationStatus::Completed => write!(f, "completed"),
            ConversationStatus::Failed => write!(f, "failed"),
            ConversationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}
