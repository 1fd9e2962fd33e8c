use crate::domain::agent::AgentSummary;

/// Member set of a team together with its entry agent
///
/// # Invariants
/// - The entry agent, when chosen, is always an element of the member set
/// - No entry agent can be chosen while the member set is empty
/// - Members are unique and keep the order in which they were selected
///
/// Every mutation of the member set goes through [`TeamMembership::set_members`],
/// which clears the entry agent as soon as it stops being a member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamMembership {
    members: Vec<String>,
    entry_agent: Option<String>,
}

/// Entry-agent option offered to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCandidate {
    pub id: String,
    pub name: String,
}

impl TeamMembership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the membership of a persisted team
    ///
    /// The stored entry agent is kept only if it belongs to the stored members.
    pub fn from_persisted<I, S>(members: I, entry_agent: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut membership = Self::new();
        membership.set_members(members);
        if let Some(entry) = entry_agent {
            let _ = membership.select_entry_agent(entry);
        }
        membership
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn entry_agent(&self) -> Option<&str> {
        self.entry_agent.as_deref()
    }

    pub fn contains(&self, agent_id: &str) -> bool {
        self.members.iter().any(|m| m == agent_id)
    }

    /// Replaces the member set
    ///
    /// # Returns
    /// The entry agent that was cleared because it left the set, if any
    pub fn set_members<I, S>(&mut self, members: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.clear();
        for member in members {
            let member = member.into();
            if !member.is_empty() && !self.members.contains(&member) {
                self.members.push(member);
            }
        }

        match &self.entry_agent {
            Some(entry) if !self.contains(entry) => {
                tracing::debug!(entry_agent = %entry, "entry agent left the member set, clearing");
                self.entry_agent.take()
            }
            _ => None,
        }
    }

    /// Chooses the entry agent among the current members
    pub fn select_entry_agent(&mut self, agent_id: impl Into<String>) -> Result<(), String> {
        let agent_id = agent_id.into();
        if self.members.is_empty() {
            return Err("Select team agents before choosing an entry agent".to_string());
        }
        if !self.contains(&agent_id) {
            return Err(format!("Agent '{}' is not a member of this team", agent_id));
        }
        self.entry_agent = Some(agent_id);
        Ok(())
    }

    pub fn clear_entry_agent(&mut self) {
        self.entry_agent = None;
    }

    /// Whether the entry-agent field accepts a selection at all
    pub fn is_entry_agent_enabled(&self) -> bool {
        !self.members.is_empty()
    }

    /// Entry-agent options: exactly the member set, in member order
    ///
    /// Names are resolved from `available`; a member missing from it is offered
    /// under its id.
    pub fn candidates(&self, available: &[AgentSummary]) -> Vec<EntryCandidate> {
        self.members
            .iter()
            .map(|id| EntryCandidate {
                id: id.clone(),
                name: available
                    .iter()
                    .find(|a| &a.id == id)
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| id.clone()),
            })
            .collect()
    }
}
