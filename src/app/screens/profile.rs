use crate::app::context::AppContext;
use crate::app::loading::LoadingFlag;
use crate::app::messages;
use crate::domain::errors::FieldErrors;
use crate::domain::user::{Email, ProfileChanges, User};

use super::{report, Outcome};

/// Current user's name and email
///
/// Only fields that differ from the loaded profile are sent.
pub struct ProfileScreen {
    ctx: AppContext,
    pub name: String,
    pub email: String,
    loaded: Option<User>,
    errors: FieldErrors,
    saving: LoadingFlag,
}

impl ProfileScreen {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            name: String::new(),
            email: String::new(),
            loaded: None,
            errors: FieldErrors::new(),
            saving: LoadingFlag::new(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.loaded.as_ref()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub async fn load(&mut self) -> Outcome {
        match self.ctx.users.profile().await {
            Ok(user) => {
                self.fill(user);
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::LOAD_FAILED),
        }
    }

    fn fill(&mut self, user: User) {
        self.name = user.name.clone();
        self.email = user.email.clone();
        self.ctx.session.set_user(user.clone());
        self.loaded = Some(user);
    }

    fn changes(&self) -> Result<ProfileChanges, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut changes = ProfileChanges::default();
        let current = self.loaded.as_ref();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "Name is required");
        } else if current.map(|u| u.name.as_str()) != Some(name) {
            changes.name = Some(name.to_string());
        }

        match Email::new(self.email.as_str()) {
            Ok(email) if current.map(|u| u.email.as_str()) != Some(email.as_str()) => {
                changes.email = Some(email);
            }
            Ok(_) => {}
            Err(_) => errors.push("email", "Please enter a valid email"),
        }

        errors.into_result(changes)
    }

    pub async fn submit(&mut self) -> Outcome {
        let changes = match self.changes() {
            Ok(changes) => changes,
            Err(errors) => {
                self.errors = errors;
                return Outcome::Rejected;
            }
        };
        self.errors = FieldErrors::new();
        if changes.is_empty() {
            self.ctx.notifier.info("Nothing to update");
            return Outcome::Done;
        }

        let _saving = self.saving.start();
        match self.ctx.users.update_profile(&changes).await {
            Ok(user) => {
                self.fill(user);
                self.ctx.notifier.success(messages::PROFILE_UPDATED);
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::SAVE_FAILED),
        }
    }
}
