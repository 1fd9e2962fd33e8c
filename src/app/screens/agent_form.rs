use crate::app::context::AppContext;
use crate::app::loading::LoadingFlag;
use crate::app::messages;
use crate::app::navigation::Route;
use crate::domain::agent::{handoff_candidates, AgentChanges, AgentDraft, AgentSummary};
use crate::domain::errors::FieldErrors;

use super::{report, FormMode, Outcome};

/// Create/edit form for one agent definition
///
/// Handoff candidates come from the available-agents listing, minus the agent
/// being edited. Handoffs are chosen by name.
pub struct AgentForm {
    ctx: AppContext,
    mode: FormMode,
    pub draft: AgentDraft,
    candidates: Vec<AgentSummary>,
    errors: FieldErrors,
    loading: LoadingFlag,
    saving: LoadingFlag,
}

impl AgentForm {
    pub fn new(ctx: AppContext, id: Option<String>) -> Self {
        Self {
            ctx,
            mode: FormMode::from_id(id),
            draft: AgentDraft::new(),
            candidates: Vec::new(),
            errors: FieldErrors::new(),
            loading: LoadingFlag::new(),
            saving: LoadingFlag::new(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn handoff_candidates(&self) -> &[AgentSummary] {
        &self.candidates
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

    /// Fetches handoff candidates and, in edit mode, the agent itself
    ///
    /// An agent that cannot be fetched sends the user back to the list.
    pub async fn load(&mut self) -> Outcome {
        let _loading = self.loading.start();

        match self.ctx.agents.list_available().await {
            Ok(available) => self.candidates = handoff_candidates(available, self.mode.id()),
            Err(e) => {
                tracing::debug!(error = %e, "handoff candidates unavailable");
                self.ctx.notifier.error(messages::AVAILABLE_AGENTS_FAILED);
            }
        }

        let FormMode::Edit(id) = &self.mode else {
            return Outcome::Done;
        };
        match self.ctx.agents.get(id).await {
            Ok(agent) => {
                self.draft = AgentDraft::from(&agent);
                Outcome::Done
            }
            Err(e) => {
                let outcome = report(&self.ctx, &e, messages::LOAD_FAILED);
                // a 401 has already redirected to login
                if !e.is_unauthorized() {
                    self.ctx.navigator.navigate(Route::Agents);
                }
                outcome
            }
        }
    }

    /// Validates the draft, then creates or updates the agent
    ///
    /// A blank system message raises a warning and issues no request. On a
    /// backend failure the draft is kept as typed.
    pub async fn submit(&mut self) -> Outcome {
        let agent = match self.draft.validate() {
            Ok(agent) => agent,
            Err(errors) => {
                if errors.contains("system_message") {
                    self.ctx.notifier.warning(messages::SYSTEM_MESSAGE_REQUIRED);
                }
                self.errors = errors;
                return Outcome::Rejected;
            }
        };
        self.errors = FieldErrors::new();

        let _saving = self.saving.start();
        let result = match &self.mode {
            FormMode::Create => self
                .ctx
                .agents
                .create(&agent)
                .await
                .map(|_| messages::CREATED),
            FormMode::Edit(id) => self
                .ctx
                .agents
                .update(id, &AgentChanges::from(agent))
                .await
                .map(|_| messages::UPDATED),
        };

        match result {
            Ok(message) => {
                self.ctx.notifier.success(message);
                self.ctx.navigator.navigate(Route::Agents);
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::SAVE_FAILED),
        }
    }
}
