use super::membership::TeamMembership;
use super::team::{NewTeam, Team};
use crate::domain::errors::FieldErrors;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Editable values of the team form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDraft {
    pub name: String,
    pub description: String,
    pub membership: TeamMembership,
}

impl TeamDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks every field and produces the request body
    ///
    /// # Rules
    /// - Name is required and at most 100 characters
    /// - Description is optional and at most 200 characters
    /// - At least one agent is selected
    /// - An entry agent is selected (membership guarantees it is a member)
    pub fn validate(&self) -> Result<NewTeam, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim();

        if name.is_empty() {
            errors.push("name", "Team name is required");
        } else if name.chars().count() > NAME_MAX_CHARS {
            errors.push(
                "name",
                format!("Team name must be at most {} characters", NAME_MAX_CHARS),
            );
        }

        if self.description.trim().chars().count() > DESCRIPTION_MAX_CHARS {
            errors.push(
                "description",
                format!(
                    "Description must be at most {} characters",
                    DESCRIPTION_MAX_CHARS
                ),
            );
        }

        if self.membership.members().is_empty() {
            errors.push("agents", "Select at least one agent");
        }

        let entry_agent = match self.membership.entry_agent() {
            Some(entry) => entry.to_string(),
            None => {
                errors.push("entry_agent", "Select an entry agent");
                String::new()
            }
        };

        let description = self.description.trim();
        errors.into_result(NewTeam {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            agents: self.membership.members().to_vec(),
            entry_agent,
        })
    }
}

impl From<&Team> for TeamDraft {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            description: team.description.clone().unwrap_or_default(),
            membership: TeamMembership::from_persisted(
                team.agents.iter().cloned(),
                Some(team.entry_agent.clone()),
            ),
        }
    }
}
