use anyhow::Result;

use super::output::{clip, confirm, page_footer, print_field_errors, timestamp};
use super::TeamCommands;
use crate::app::screens::{Outcome, TeamForm, TeamList};
use crate::app::AppContext;

pub async fn run(ctx: &AppContext, command: TeamCommands) -> Result<Outcome> {
    match command {
        TeamCommands::List(args) => Ok(list(ctx, args.page).await),
        TeamCommands::Show { id } => Ok(show(ctx, id).await),
        TeamCommands::Create {
            name,
            description,
            agents,
            entry_agent,
        } => {
            let mut form = TeamForm::new(ctx.clone(), None);
            let loaded = form.load().await;
            if !loaded.is_done() {
                return Ok(loaded);
            }
            form.set_name(name);
            if let Some(description) = description {
                form.set_description(description);
            }
            form.set_members(agents);
            Ok(submit(form, Some(entry_agent)).await)
        }
        TeamCommands::Update {
            id,
            name,
            description,
            agents,
            entry_agent,
        } => {
            let mut form = TeamForm::new(ctx.clone(), Some(id));
            let loaded = form.load().await;
            if !loaded.is_done() {
                return Ok(loaded);
            }
            if let Some(name) = name {
                form.set_name(name);
            }
            if let Some(description) = description {
                form.set_description(description);
            }
            if !agents.is_empty() {
                let before = form.entry_agent().map(str::to_string);
                form.set_members(agents);
                if let (Some(before), None) = (before, form.entry_agent()) {
                    eprintln!("  entry agent '{}' is no longer a member and was cleared", before);
                }
            }
            Ok(submit(form, entry_agent).await)
        }
        TeamCommands::Delete { id, confirm: args } => {
            let mut list = TeamList::new(ctx.clone());
            let loaded = list.load().await;
            if !loaded.is_done() {
                return Ok(loaded);
            }
            if !list.request_delete(&id) {
                ctx.notifier.error(&format!("No team with id {}", id));
                return Ok(Outcome::Rejected);
            }
            if !args.yes && !confirm(&format!("Delete team {}?", id))? {
                list.dismiss_delete();
                println!("Cancelled.");
                return Ok(Outcome::Done);
            }
            Ok(list.confirm_delete().await)
        }
    }
}

async fn submit(mut form: TeamForm, entry_agent: Option<String>) -> Outcome {
    if let Some(entry_agent) = entry_agent {
        if let Err(message) = form.select_entry_agent(entry_agent) {
            eprintln!("  entry_agent: {}", message);
        }
    }

    let outcome = form.submit().await;
    if outcome == Outcome::Rejected {
        print_field_errors(form.errors());
    }
    outcome
}

async fn list(ctx: &AppContext, page: usize) -> Outcome {
    let mut list = TeamList::new(ctx.clone());
    let outcome = list.load().await;
    if !outcome.is_done() {
        return outcome;
    }
    list.set_page(page);

    if list.rows().is_empty() {
        println!("No teams yet. Create one with `agentput teams create`.");
        return Outcome::Done;
    }

    println!(
        "{:<36}  {:<20}  {:<30}  {:>6}  {}",
        "ID", "NAME", "DESCRIPTION", "AGENTS", "CREATED"
    );
    for team in list.page() {
        println!(
            "{:<36}  {:<20}  {:<30}  {:>6}  {}",
            team.id,
            clip(&team.name, 20),
            clip(team.description.as_deref().unwrap_or("-"), 30),
            team.agent_count,
            timestamp(&team.created_at)
        );
    }
    let pager = list.pager();
    page_footer(pager.page(), pager.page_count(list.rows().len()), list.rows().len());
    Outcome::Done
}

async fn show(ctx: &AppContext, id: String) -> Outcome {
    let mut form = TeamForm::new(ctx.clone(), Some(id));
    let outcome = form.load().await;
    if !outcome.is_done() {
        return outcome;
    }

    let draft = form.draft();
    println!("{}", draft.name);
    if !draft.description.is_empty() {
        println!("{}", draft.description);
    }
    println!("\nMembers:");
    let entry = form.entry_agent();
    for candidate in form.entry_candidates() {
        let marker = if Some(candidate.id.as_str()) == entry { "*" } else { " " };
        println!("  {} {:<24}  {}", marker, clip(&candidate.name, 24), candidate.id);
    }
    println!("\n  * entry agent");
    Outcome::Done
}
