use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Team definition as returned by `GET /teams/{id}`
///
/// `agents` holds agent ids; `entry_agent` is one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub agents: Vec<String>,
    pub entry_agent: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(with = "crate::domain::time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::domain::time")]
    pub updated_at: DateTime<Utc>,
}

/// Row of the team listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub agent_count: usize,
    pub entry_agent: String,
    #[serde(with = "crate::domain::time")]
    pub created_at: DateTime<Utc>,
}

/// Validated body of `POST /teams`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTeam {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub agents: Vec<String>,
    pub entry_agent: String,
}

/// Body of `PUT /teams/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_agent: Option<String>,
}

impl From<NewTeam> for TeamChanges {
    fn from(team: NewTeam) -> Self {
        Self {
            name: Some(team.name),
            // an emptied description must reach the backend as "", not be skipped
            description: Some(team.description.unwrap_or_default()),
            agents: Some(team.agents),
            entry_agent: Some(team.entry_agent),
        }
    }
}
