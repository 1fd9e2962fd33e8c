use super::context::AppContext;

/// Validates a persisted token at start-up by fetching the profile
///
/// A token whose profile cannot be fetched, for any reason, ends the session.
/// Returns whether the user is signed in afterwards.
pub async fn restore_session(ctx: &AppContext) -> bool {
    if !ctx.session.is_authenticated() {
        return false;
    }
    if ctx.session.user().is_some() {
        return true;
    }

    match ctx.users.profile().await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "session restored");
            ctx.session.set_user(user);
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored token rejected, signing out");
            ctx.session.logout();
            false
        }
    }
}
