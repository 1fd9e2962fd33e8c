use anyhow::Result;

use super::output::{clip, confirm, page_footer, print_field_errors, timestamp};
use super::AgentCommands;
use crate::app::screens::{AgentForm, AgentList, Outcome};
use crate::app::AppContext;

pub async fn run(ctx: &AppContext, command: AgentCommands) -> Result<Outcome> {
    match command {
        AgentCommands::List(args) => Ok(list(ctx, args.page).await),
        AgentCommands::Show { id } => Ok(show(ctx, id).await),
        AgentCommands::Create {
            name,
            system_message,
            tools,
            handoffs,
        } => {
            let mut form = AgentForm::new(ctx.clone(), None);
            let loaded = form.load().await;
            if !loaded.is_done() {
                return Ok(loaded);
            }
            form.draft.name = name;
            form.draft.system_message = system_message;
            apply_lists(&mut form, tools, handoffs);
            Ok(submit(form).await)
        }
        AgentCommands::Update {
            id,
            name,
            system_message,
            tools,
            handoffs,
        } => {
            let mut form = AgentForm::new(ctx.clone(), Some(id));
            let loaded = form.load().await;
            if !loaded.is_done() {
                return Ok(loaded);
            }
            if let Some(name) = name {
                form.draft.name = name;
            }
            if let Some(system_message) = system_message {
                form.draft.system_message = system_message;
            }
            apply_lists(&mut form, tools, handoffs);
            Ok(submit(form).await)
        }
        AgentCommands::Delete { id, confirm: args } => {
            let mut list = AgentList::new(ctx.clone());
            let loaded = list.load().await;
            if !loaded.is_done() {
                return Ok(loaded);
            }
            if !list.request_delete(&id) {
                ctx.notifier.error(&format!("No agent with id {}", id));
                return Ok(Outcome::Rejected);
            }
            if !args.yes && !confirm(&format!("Delete agent {}?", id))? {
                list.dismiss_delete();
                println!("Cancelled.");
                return Ok(Outcome::Done);
            }
            Ok(list.confirm_delete().await)
        }
    }
}

/// Non-empty lists replace the draft's; unknown handoff names are refused
fn apply_lists(form: &mut AgentForm, tools: Vec<String>, handoffs: Vec<String>) {
    if !tools.is_empty() {
        for existing in form.draft.tools().to_vec() {
            form.draft.remove_tool(&existing);
        }
        for tool in tools {
            if !form.draft.add_tool(tool.as_str()) {
                eprintln!("  skipping tool '{}' (blank or duplicate)", tool);
            }
        }
    }

    if !handoffs.is_empty() {
        let known: Vec<String> = handoffs
            .into_iter()
            .filter(|name| {
                let ok = form.handoff_candidates().iter().any(|a| &a.name == name);
                if !ok {
                    eprintln!("  skipping handoff '{}' (not an available agent)", name);
                }
                ok
            })
            .collect();
        form.draft.set_handoffs(known);
    }
}

async fn submit(mut form: AgentForm) -> Outcome {
    let outcome = form.submit().await;
    if outcome == Outcome::Rejected {
        print_field_errors(form.errors());
    }
    outcome
}

async fn list(ctx: &AppContext, page: usize) -> Outcome {
    let mut list = AgentList::new(ctx.clone());
    let outcome = list.load().await;
    if !outcome.is_done() {
        return outcome;
    }
    list.set_page(page);

    if list.rows().is_empty() {
        println!("No agents yet. Create one with `agentput agents create`.");
        return Outcome::Done;
    }

    println!(
        "{:<36}  {:<24}  {:>8}  {:>5}  {}",
        "ID", "NAME", "HANDOFFS", "TOOLS", "CREATED"
    );
    for agent in list.page() {
        println!(
            "{:<36}  {:<24}  {:>8}  {:>5}  {}",
            agent.id,
            clip(&agent.name, 24),
            agent.handoff_count,
            agent.tool_count,
            timestamp(&agent.created_at)
        );
    }
    let pager = list.pager();
    page_footer(pager.page(), pager.page_count(list.rows().len()), list.rows().len());
    Outcome::Done
}

async fn show(ctx: &AppContext, id: String) -> Outcome {
    let mut form = AgentForm::new(ctx.clone(), Some(id));
    let outcome = form.load().await;
    if !outcome.is_done() {
        return outcome;
    }

    let draft = &form.draft;
    println!("{}", draft.name);
    println!("\nSystem message:\n{}\n", draft.system_message);
    println!("Tools:    {}", join_or_dash(draft.tools()));
    println!("Handoffs: {}", join_or_dash(draft.handoffs()));
    Outcome::Done
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
