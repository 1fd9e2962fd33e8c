use crate::app::context::AppContext;
use crate::app::loading::LoadingFlag;
use crate::app::messages;
use crate::app::navigation::Route;
use crate::domain::errors::FieldErrors;
use crate::domain::user::{Email, NewUser, Password};

use super::{report, Outcome};

const MISMATCH: &str = "The two passwords do not match";

/// Registration form
///
/// The confirm-password check re-runs whenever either password field changes,
/// so the mismatch message appears and disappears as the user types.
pub struct RegisterScreen {
    ctx: AppContext,
    pub name: String,
    pub email: String,
    password: String,
    confirm_password: String,
    errors: FieldErrors,
    saving: LoadingFlag,
}

impl RegisterScreen {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            errors: FieldErrors::new(),
            saving: LoadingFlag::new(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.recheck_confirmation();
    }

    pub fn set_confirm_password(&mut self, confirm: impl Into<String>) {
        self.confirm_password = confirm.into();
        self.recheck_confirmation();
    }

    fn recheck_confirmation(&mut self) {
        self.errors.clear_field("confirm_password");
        if !self.confirm_password.is_empty() && self.confirm_password != self.password {
            self.errors.push("confirm_password", MISMATCH);
        }
    }

    fn validate(&self) -> Result<NewUser, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name", "Name is required");
        }
        let email = Email::new(self.email.as_str())
            .map_err(|_| errors.push("email", "Please enter a valid email"))
            .ok();
        let password = Password::new(self.password.as_str())
            .map_err(|e| errors.push("password", e))
            .ok();
        if self.confirm_password.is_empty() {
            errors.push("confirm_password", "Please confirm the password");
        } else if self.confirm_password != self.password {
            errors.push("confirm_password", MISMATCH);
        }

        match (email, password) {
            (Some(email), Some(password)) => errors.into_result(NewUser {
                name: name.to_string(),
                email,
                password,
            }),
            _ => Err(errors),
        }
    }

    /// Creates the account and sends the user to the login screen
    pub async fn submit(&mut self) -> Outcome {
        let user = match self.validate() {
            Ok(user) => user,
            Err(errors) => {
                self.errors = errors;
                return Outcome::Rejected;
            }
        };
        self.errors = FieldErrors::new();

        let _saving = self.saving.start();
        match self.ctx.users.register(&user).await {
            Ok(created) => {
                tracing::info!(user_id = %created.id, "account registered");
                self.ctx.notifier.success(messages::REGISTER_SUCCESS);
                self.ctx.navigator.navigate(Route::Login);
                Outcome::Done
            }
            Err(e) => report(&self.ctx, &e, messages::REGISTER_FAILED),
        }
    }
}
