use super::agent::{Agent, AgentSummary, NewAgent};
use crate::domain::errors::FieldErrors;

/// Maximum agent name length accepted by the backend
pub const NAME_MAX_CHARS: usize = 100;

/// Editable values of the agent form
///
/// The draft is owned by the form screen and mutated in place; it only becomes
/// a request body through [`AgentDraft::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentDraft {
    pub name: String,
    pub system_message: String,
    handoffs: Vec<String>,
    tools: Vec<String>,
}

impl AgentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handoffs(&self) -> &[String] {
        &self.handoffs
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    /// Replaces the handoff targets (agent names), dropping blanks and repeats
    pub fn set_handoffs<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.handoffs.clear();
        for name in names {
            let name = name.into().trim().to_string();
            if !name.is_empty() && !self.handoffs.contains(&name) {
                self.handoffs.push(name);
            }
        }
    }

    /// Adds a tool tag
    ///
    /// # Returns
    /// `false` when the tag is blank or already present
    pub fn add_tool(&mut self, tool: impl Into<String>) -> bool {
        let tool = tool.into().trim().to_string();
        if tool.is_empty() || self.tools.contains(&tool) {
            return false;
        }
        self.tools.push(tool);
        true
    }

    pub fn remove_tool(&mut self, tool: &str) -> bool {
        let before = self.tools.len();
        self.tools.retain(|t| t != tool);
        self.tools.len() != before
    }

    /// Checks every field and produces the request body
    ///
    /// # Rules
    /// - Name is required and at most 100 characters
    /// - System message must contain non-whitespace text
    pub fn validate(&self) -> Result<NewAgent, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim();

        if name.is_empty() {
            errors.push("name", "Agent name is required");
        } else if name.chars().count() > NAME_MAX_CHARS {
            errors.push(
                "name",
                format!("Agent name must be at most {} characters", NAME_MAX_CHARS),
            );
        }

        if self.system_message.trim().is_empty() {
            errors.push("system_message", "System message is required");
        }

        errors.into_result(NewAgent {
            name: name.to_string(),
            system_message: self.system_message.clone(),
            handoffs: self.handoffs.clone(),
            tools: self.tools.clone(),
        })
    }
}

impl From<&Agent> for AgentDraft {
    fn from(agent: &Agent) -> Self {
        let mut draft = Self {
            name: agent.name.clone(),
            system_message: agent.system_message.clone(),
            ..Self::default()
        };
        draft.set_handoffs(agent.handoffs.iter().cloned());
        for tool in &agent.tools {
            draft.add_tool(tool.clone());
        }
        draft
    }
}

/// Agents an agent may hand off to: everything available except itself
pub fn handoff_candidates(available: Vec<AgentSummary>, editing: Option<&str>) -> Vec<AgentSummary> {
    available
        .into_iter()
        .filter(|a| Some(a.id.as_str()) != editing)
        .collect()
}
