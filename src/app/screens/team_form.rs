use crate::app::context::AppContext;
use crate::app::loading::LoadingFlag;
use crate::app::messages;
use crate::app::navigation::Route;
use crate::domain::agent::AgentSummary;
use crate::domain::errors::FieldErrors;
use crate::domain::team::{EntryCandidate, TeamChanges, TeamDraft};

use super::{report, FormMode, Outcome};

/// Create/edit form for a team
///
/// Member and entry-agent changes go through the form so the entry agent is
/// always one of the selected members.
pub struct TeamForm {
    ctx: AppContext,
    mode: FormMode,
    draft: TeamDraft,
    available: Vec<AgentSummary>,
    errors: FieldErrors,
    loading: LoadingFlag,
    saving: LoadingFlag,
}

impl TeamForm {
    pub fn new(ctx: AppContext, id: Option<String>) -> Self {
        Self {
            ctx,
            mode: FormMode::from_id(id),
            draft: TeamDraft::new(),
            available: Vec::new(),
            errors: FieldErrors::new(),
            loading: LoadingFlag::new(),
            saving: LoadingFlag::new(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &TeamDraft {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Agents offered for membership
    pub fn available_agents(&self) -> &[AgentSummary] {
        &self.available
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_set()
    }

    pub async fn load(&mut self) -> Outcome {
        let _loading = self.loading.start();

        match self.ctx.agents.list_available().await {
            Ok(available) => self.available = available,
            Err(e) => {
                tracing::debug!(error = %e, "team member candidates unavailable");
                self.ctx.notifier.error(messages::AVAILABLE_AGENTS_FAILED);
            }
        }

        let FormMode::Edit(id) = &self.mode else {
            return Outcome::Done;
        };
        match self.ctx.teams.get(id).await {
            Ok(team) => {
                self.draft = TeamDraft::from(&team);
                Outcome::Done
            }
            Err(e) => {
                let outcome = report(&self.ctx, &e, messages::LOAD_FAILED);
                // a 401 has already redirected to login
                if !e.is_unauthorized() {
                    self.ctx.navigator.navigate(Route::Teams);
                }
                outcome
            }
        }
    }

    /// Replaces the member set; an entry agent outside it is cleared
    pub fn set_members<I, S>(&mut self, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.membership.set_members(members);
        self.errors.clear_field("agents");
    }

    pub fn select_entry_agent(&mut self, agent_id: impl Into<String>) -> Result<(), String> {
        self.draft.membership.select_entry_agent(agent_id)?;
        self.errors.clear_field("entry_agent");
        Ok(())
    }

    pub fn entry_agent(&self) -> Option<&str> {
        self.draft.membership.entry_agent()
    }

    /// False exactly while no member is selected
    pub fn is_entry_agent_enabled(&self) -> bool {
        self.draft.membership.is_entry_agent_enabled()
    }

    pub fn entry_candidates(&self) -> Vec<EntryCandidate> {
        self.draft.membership.candidates(&self.available)
    }

    pub async fn submit(&mut self) -> Outcome {
        let team = match self.draft.validate() {
            Ok(team) => team,
            Err(errors) => {
                self.errors = errors;
                return Outcome::Rejected;
            }
        };
        self.errors = FieldErrors::new();

        let _saving = self.saving.start();
        let result = match &self.mode {
            FormMode::Create => self
                .ctx
                .teams
                .create(&team)
                .await
                .map(|_| messages::CREATED),
            FormMode::Edit(id) => self
                .ctx
                .teams
                .update(id, &TeamChanges::from(team))
                .await
                .map(|_| messages::UPDATED),
        };

        match result {
            Ok(message) => {
                self.ctx.notifier.success(message);
                self.ctx.navigator.navigate(Route::Teams);
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::SAVE_FAILED),
        }
    }
}
