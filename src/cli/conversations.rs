use anyhow::Result;

use super::output::{clip, confirm, optional_timestamp, page_footer, print_field_errors, timestamp};
use super::ConversationCommands;
use crate::app::screens::{ConversationList, Outcome};
use crate::app::AppContext;
use crate::domain::conversation::Conversation;

pub async fn run(ctx: &AppContext, command: ConversationCommands) -> Result<Outcome> {
    let mut list = ConversationList::new(ctx.clone());

    match command {
        ConversationCommands::List(args) => {
            let outcome = list.load().await;
            if outcome.is_done() {
                list.set_page(args.page);
                print_rows(&list);
            }
            Ok(outcome)
        }
        ConversationCommands::Show { id } => {
            let outcome = list.show(&id).await;
            if let Some(conversation) = list.selected() {
                print_detail(conversation);
            }
            Ok(outcome)
        }
        ConversationCommands::Start { team, task } => {
            let outcome = list.start(&team, &task).await;
            match (&outcome, list.selected()) {
                (Outcome::Rejected, _) => print_field_errors(list.errors()),
                (Outcome::Done, Some(conversation)) => print_detail(conversation),
                _ => {}
            }
            Ok(outcome)
        }
        ConversationCommands::Cancel { id } => {
            // the list supplies the last known status for the local check
            let loaded = list.load().await;
            if !loaded.is_done() {
                return Ok(loaded);
            }
            Ok(list.cancel(&id).await)
        }
        ConversationCommands::Delete { id, confirm: args } => {
            let loaded = list.load().await;
            if !loaded.is_done() {
                return Ok(loaded);
            }
            if !list.request_delete(&id) {
                ctx.notifier.error(&format!("No conversation with id {}", id));
                return Ok(Outcome::Rejected);
            }
            if !args.yes && !confirm(&format!("Delete conversation {}?", id))? {
                list.dismiss_delete();
                println!("Cancelled.");
                return Ok(Outcome::Done);
            }
            Ok(list.confirm_delete().await)
        }
    }
}

fn print_rows(list: &ConversationList) {
    if list.rows().is_empty() {
        println!("No conversations yet. Start one with `agentput conversations start`.");
        return;
    }

    println!("{:<36}  {:<10}  {:<36}  {:<16}  {}", "ID", "STATUS", "TEAM", "CREATED", "TASK");
    for conversation in list.page() {
        println!(
            "{:<36}  {:<10}  {:<36}  {:<16}  {}",
            conversation.id,
            conversation.status.to_string(),
            conversation.team_id,
            timestamp(&conversation.created_at),
            clip(&conversation.task, 40)
        );
    }
    let pager = list.pager();
    page_footer(pager.page(), pager.page_count(list.rows().len()), list.rows().len());
}

fn print_detail(conversation: &Conversation) {
    println!("{}  [{}]", conversation.id, conversation.status);
    println!("  team:      {}", conversation.team_id);
    println!("  created:   {}", timestamp(&conversation.created_at));
    println!("  started:   {}", optional_timestamp(conversation.started_at.as_ref()));
    println!("  completed: {}", optional_timestamp(conversation.completed_at.as_ref()));
    println!("\n{}", conversation.task);
}
