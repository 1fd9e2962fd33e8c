use anyhow::Result;

use super::output::{password as read_password, print_field_errors};
use crate::app::screens::{sign_out, LoginScreen, Outcome, ProfileScreen, RegisterScreen};
use crate::app::AppContext;

pub async fn login(ctx: &AppContext, email: String, password: Option<String>) -> Result<Outcome> {
    let mut screen = LoginScreen::new(ctx.clone());
    screen.email = email;
    screen.password = match password {
        Some(password) => password,
        None => read_password("Password")?,
    };

    let outcome = screen.submit().await;
    if outcome == Outcome::Rejected {
        print_field_errors(screen.errors());
    }
    Ok(outcome)
}

pub async fn register(
    ctx: &AppContext,
    name: String,
    email: String,
    password: Option<String>,
    confirm_password: Option<String>,
) -> Result<Outcome> {
    let mut screen = RegisterScreen::new(ctx.clone());
    screen.name = name;
    screen.email = email;
    screen.set_password(match password {
        Some(password) => password,
        None => read_password("Password")?,
    });
    screen.set_confirm_password(match confirm_password {
        Some(confirm) => confirm,
        None => read_password("Confirm password")?,
    });

    let outcome = screen.submit().await;
    if outcome == Outcome::Rejected {
        print_field_errors(screen.errors());
    }
    Ok(outcome)
}

pub fn logout(ctx: &AppContext) -> Outcome {
    sign_out(ctx);
    ctx.notifier.info("Signed out");
    Outcome::Done
}

pub fn whoami(ctx: &AppContext) -> Outcome {
    match ctx.session.user() {
        Some(user) => {
            println!("{} <{}>", user.name, user.email);
            println!("  id: {}", user.id);
            Outcome::Done
        }
        None => {
            ctx.notifier.error("Not signed in");
            Outcome::Rejected
        }
    }
}

pub async fn update_profile(
    ctx: &AppContext,
    name: Option<String>,
    email: Option<String>,
) -> Outcome {
    let mut screen = ProfileScreen::new(ctx.clone());
    let loaded = screen.load().await;
    if !loaded.is_done() {
        return loaded;
    }
    if let Some(name) = name {
        screen.name = name;
    }
    if let Some(email) = email {
        screen.email = email;
    }

    let outcome = screen.submit().await;
    if outcome == Outcome::Rejected {
        print_field_errors(screen.errors());
    }
    outcome
}
