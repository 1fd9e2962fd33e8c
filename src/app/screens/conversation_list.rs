use crate::app::context::AppContext;
use crate::app::loading::LoadingFlag;
use crate::app::messages;
use crate::domain::conversation::{Conversation, ConversationSummary, NewConversation};
use crate::domain::errors::FieldErrors;

use super::pager::Pager;
use super::{report, Outcome};

/// Conversation records: start, inspect, cancel, delete
///
/// Status is owned by the backend. The client only asks for cancellation, and
/// only while the last known status still allows it.
pub struct ConversationList {
    ctx: AppContext,
    rows: Vec<ConversationSummary>,
    selected: Option<Conversation>,
    pager: Pager,
    pending_delete: Option<String>,
    errors: FieldErrors,
    loading: LoadingFlag,
}

impl ConversationList {
    pub fn new(ctx: AppContext) -> Self {
        let pager = Pager::new(ctx.config.page_size);
        Self {
            ctx,
            rows: Vec::new(),
            selected: None,
            pager,
            pending_delete: None,
            errors: FieldErrors::new(),
            loading: LoadingFlag::new(),
        }
    }

    pub fn rows(&self) -> &[ConversationSummary] {
        &self.rows
    }

    pub fn page(&self) -> &[ConversationSummary] {
        self.pager.slice(&self.rows)
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page, self.rows.len());
    }

    pub fn selected(&self) -> Option<&Conversation> {
        self.selected.as_ref()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    pub async fn load(&mut self) -> Outcome {
        let _loading = self.loading.start();
        match self.ctx.conversations.list().await {
            Ok(rows) => {
                self.rows = rows;
                let page = self.pager.page();
                self.pager.set_page(page, self.rows.len());
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::LOAD_FAILED),
        }
    }

    /// Submits `task` to `team_id` and selects the new conversation
    pub async fn start(&mut self, team_id: &str, task: &str) -> Outcome {
        let request = match NewConversation::new(team_id, task) {
            Ok(request) => request,
            Err(errors) => {
                self.errors = errors;
                return Outcome::Rejected;
            }
        };
        self.errors = FieldErrors::new();

        let created = {
            let _loading = self.loading.start();
            self.ctx.conversations.create(&request).await
        };
        match created {
            Ok(conversation) => {
                tracing::info!(conversation_id = %conversation.id, team_id = %conversation.team_id, "conversation started");
                self.selected = Some(conversation);
                self.ctx.notifier.success(messages::CREATED);
                self.load().await;
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::SAVE_FAILED),
        }
    }

    pub async fn show(&mut self, id: &str) -> Outcome {
        let _loading = self.loading.start();
        match self.ctx.conversations.get(id).await {
            Ok(conversation) => {
                self.selected = Some(conversation);
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::LOAD_FAILED),
        }
    }

    /// Requests cancellation, refusing locally when the known status is final
    pub async fn cancel(&mut self, id: &str) -> Outcome {
        let known = self
            .selected
            .as_ref()
            .filter(|c| c.id == id)
            .map(|c| c.status)
            .or_else(|| self.rows.iter().find(|c| c.id == id).map(|c| c.status));
        if let Some(status) = known.filter(|s| !s.is_cancellable()) {
            tracing::debug!(conversation_id = %id, %status, "not cancellable");
            self.ctx.notifier.warning(messages::NOT_CANCELLABLE);
            return Outcome::Rejected;
        }

        let result = {
            let _loading = self.loading.start();
            self.ctx.conversations.cancel(id).await
        };
        match result {
            Ok(()) => {
                self.ctx.notifier.success(messages::CANCELLED);
                if self.selected.as_ref().is_some_and(|c| c.id == id) {
                    self.show(id).await;
                }
                self.load().await;
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::CANCEL_FAILED),
        }
    }

    pub fn request_delete(&mut self, id: &str) -> bool {
        if !self.rows.iter().any(|c| c.id == id) {
            return false;
        }
        self.pending_delete = Some(id.to_string());
        true
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn dismiss_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self) -> Outcome {
        let Some(id) = self.pending_delete.take() else {
            return Outcome::Rejected;
        };

        let result = {
            let _loading = self.loading.start();
            self.ctx.conversations.delete(&id).await
        };
        match result {
            Ok(()) => {
                if self.selected.as_ref().is_some_and(|c| c.id == id) {
                    self.selected = None;
                }
                self.ctx.notifier.success(messages::DELETED);
                self.load().await;
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::DELETE_FAILED),
        }
    }
}
