use crate::app::context::AppContext;
use crate::app::loading::LoadingFlag;
use crate::app::messages;
use crate::app::navigation::Route;
use crate::domain::errors::FieldErrors;
use crate::domain::user::{Credentials, Email};

use super::{report, Outcome};

pub struct LoginScreen {
    ctx: AppContext,
    pub email: String,
    pub password: String,
    errors: FieldErrors,
    loading: LoadingFlag,
}

impl LoginScreen {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            email: String::new(),
            password: String::new(),
            errors: FieldErrors::new(),
            loading: LoadingFlag::new(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    /// Logs in, then fetches the profile before landing on Home
    ///
    /// A token whose profile cannot be fetched is discarded.
    pub async fn submit(&mut self) -> Outcome {
        let mut errors = FieldErrors::new();
        let email = match Email::new(self.email.as_str()) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push("email", "Please enter a valid email");
                None
            }
        };
        if self.password.is_empty() {
            errors.push("password", "Password is required");
        }
        self.errors = errors;
        let Some(email) = email.filter(|_| self.errors.is_empty()) else {
            return Outcome::Rejected;
        };

        let _loading = self.loading.start();
        let credentials = Credentials {
            email,
            password: self.password.clone(),
        };

        let token = match self.ctx.users.login(&credentials).await {
            Ok(token) => token,
            Err(e) => return report(&self.ctx, &e, messages::LOGIN_FAILED),
        };
        self.ctx.session.set_token(token.access_token);

        match self.ctx.users.profile().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "signed in");
                self.ctx.session.set_user(user);
                self.ctx.notifier.success(messages::LOGIN_SUCCESS);
                self.ctx.navigator.navigate(Route::Home);
                Outcome::Done
            }
            Err(e) => {
                self.ctx.session.logout();
                report(&self.ctx, &e, messages::LOGIN_FAILED)
            }
        }
    }
}

/// Ends the session and returns to the login screen
pub fn sign_out(ctx: &AppContext) {
    ctx.session.logout();
    ctx.navigator.navigate(Route::Login);
}
