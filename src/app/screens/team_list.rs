use crate::app::context::AppContext;
use crate::app::loading::LoadingFlag;
use crate::app::messages;
use crate::app::navigation::Route;
use crate::domain::team::TeamSummary;
use crate::domain::repositories::ListParams;

use super::pager::Pager;
use super::{report, Outcome};

/// Team listing with confirmed delete
///
/// The whole collection is fetched; paging is a slice over it. A failed fetch
/// keeps the rows already shown.
pub struct TeamList {
    ctx: AppContext,
    rows: Vec<TeamSummary>,
    pager: Pager,
    pending_delete: Option<String>,
    loading: LoadingFlag,
}

impl TeamList {
    pub fn new(ctx: AppContext) -> Self {
        let pager = Pager::new(ctx.config.page_size);
        Self {
            ctx,
            rows: Vec::new(),
            pager,
            pending_delete: None,
            loading: LoadingFlag::new(),
        }
    }

    pub fn rows(&self) -> &[TeamSummary] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    pub async fn load(&mut self) -> Outcome {
        let _loading = self.loading.start();
        match self.ctx.teams.list(ListParams::default()).await {
            Ok(rows) => {
                self.rows = rows;
                let page = self.pager.page();
                self.pager.set_page(page, self.rows.len());
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::LOAD_FAILED),
        }
    }

    /// Rows on the current page
    pub fn page(&self) -> &[TeamSummary] {
        self.pager.slice(&self.rows)
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page, self.rows.len());
    }

    pub fn edit(&self, id: &str) {
        self.ctx.navigator.navigate(Route::EditTeam(id.to_string()));
    }

    pub fn create(&self) {
        self.ctx.navigator.navigate(Route::NewTeam);
    }

    /// Marks a listed team for deletion; nothing is sent until confirmed
    pub fn request_delete(&mut self, id: &str) -> bool {
        if !self.rows.iter().any(|a| a.id == id) {
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

    /// Deletes the pending team, then refetches the list
    pub async fn confirm_delete(&mut self) -> Outcome {
        let Some(id) = self.pending_delete.take() else {
            return Outcome::Rejected;
        };

        let result = {
            let _loading = self.loading.start();
            self.ctx.teams.delete(&id).await
        };
        match result {
            Ok(()) => {
                tracing::info!(team_id = %id, "team deleted");
                self.ctx.notifier.success(messages::DELETED);
                self.load().await;
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::DELETE_FAILED),
        }
    }
}
