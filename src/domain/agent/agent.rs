use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full agent definition as returned by `GET /agents/{id}`
///
/// Handoffs reference other agents by *name*, not by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub system_message: String,
    #[serde(default)]
    pub handoffs: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(with = "crate::domain::time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::domain::time")]
    pub updated_at: DateTime<Utc>,
}

/// Row of the agent listing, with derived counts instead of the full lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(with = "crate::domain::time")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub handoff_count: usize,
    #[serde(default)]
    pub tool_count: usize,
}

/// Validated body of `POST /agents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAgent {
    pub name: String,
    pub system_message: String,
    pub handoffs: Vec<String>,
    pub tools: Vec<String>,
}

/// Body of `PUT /agents/{id}`; absent fields are left untouched by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handoffs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
}

impl From<NewAgent> for AgentChanges {
    fn from(agent: NewAgent) -> Self {
        Self {
            name: Some(agent.name),
            system_message: Some(agent.system_message),
            handoffs: Some(agent.handoffs),
            tools: Some(agent.tools),
        }
    }
}
