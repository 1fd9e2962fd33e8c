//! Command-line front end
//!
//! Every command drives one screen:
//! - `login`, `register`, `logout`, `whoami`, `profile`: account
//! - `agents ...`, `teams ...`: definition lists and forms
//! - `conversations ...`: start, inspect, cancel and delete runs

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};

use crate::app::navigation::{guard, History, Navigator, Route};
use crate::app::screens::Outcome;
use crate::app::{restore_session, AppContext};
use crate::config::ClientConfig;
use crate::infrastructure::FileTokenStore;

pub mod account;
pub mod agents;
pub mod conversations;
pub mod output;
pub mod teams;

pub use output::ConsoleNotifier;

/// AgentPut administration client
#[derive(Parser, Debug)]
#[command(name = "agentput")]
#[command(about = "Manage AgentPut agents, teams and conversations")]
#[command(version)]
pub struct Cli {
    /// Backend base URL including the /api prefix (overrides AGENTPUT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Forget the stored session token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Update the signed-in user's name or email
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Agent definitions
    Agents {
        #[command(subcommand)]
        command: AgentCommands,
    },
    /// Teams of agents
    Teams {
        #[command(subcommand)]
        command: TeamCommands,
    },
    /// Team executions
    Conversations {
        #[command(subcommand)]
        command: ConversationCommands,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// 1-based page of the client-side listing
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ConfirmArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum AgentCommands {
    List(PageArgs),
    Show {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        system_message: String,
        /// Repeatable
        #[arg(long = "tool")]
        tools: Vec<String>,
        /// Agent name to hand off to; repeatable
        #[arg(long = "handoff")]
        handoffs: Vec<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        system_message: Option<String>,
        /// Replaces the tool list when given
        #[arg(long = "tool")]
        tools: Vec<String>,
        /// Replaces the handoff list when given
        #[arg(long = "handoff")]
        handoffs: Vec<String>,
    },
    Delete {
        id: String,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    List(PageArgs),
    Show {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Member agent id; repeatable
        #[arg(long = "agent", required = true)]
        agents: Vec<String>,
        #[arg(long)]
        entry_agent: String,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Replaces the member set when given
        #[arg(long = "agent")]
        agents: Vec<String>,
        #[arg(long)]
        entry_agent: Option<String>,
    },
    Delete {
        id: String,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConversationCommands {
    List(PageArgs),
    Show {
        id: String,
    },
    /// Run a task on a team
    Start {
        #[arg(long)]
        team: String,
        task: String,
    },
    Cancel {
        id: String,
    },
    Delete {
        id: String,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

impl Commands {
    /// Screen the command opens, used for the sign-in guard
    fn route(&self) -> Route {
        match self {
            Commands::Login { .. } | Commands::Logout => Route::Login,
            Commands::Register { .. } => Route::Register,
            Commands::Whoami | Commands::Profile { .. } => Route::Home,
            Commands::Agents { command } => match command {
                AgentCommands::Create { .. } => Route::NewAgent,
                AgentCommands::Update { id, .. } => Route::EditAgent(id.clone()),
                _ => Route::Agents,
            },
            Commands::Teams { command } => match command {
                TeamCommands::Create { .. } => Route::NewTeam,
                TeamCommands::Update { id, .. } => Route::EditTeam(id.clone()),
                _ => Route::Teams,
            },
            Commands::Conversations { .. } => Route::Conversations,
        }
    }
}

/// Runs one command against the configured backend
pub async fn run(cli: Cli, config: ClientConfig) -> Result<ExitCode> {
    let config = match cli.api_url {
        Some(url) => config.with_api_url(url),
        None => config,
    };

    let store = Arc::new(FileTokenStore::new(config.token_path.clone()));
    let history = Arc::new(History::new());
    let ctx = AppContext::connect(config, store, history.clone(), Arc::new(ConsoleNotifier))?;

    let requested = cli.command.route();
    if requested.requires_auth()
        && (guard(requested.clone(), &ctx.session) == Route::Login || !restore_session(&ctx).await)
    {
        bail!("not signed in; run `agentput login` first");
    }
    history.navigate(requested.clone());

    let outcome = match cli.command {
        Commands::Login { email, password } => account::login(&ctx, email, password).await?,
        Commands::Register {
            name,
            email,
            password,
            confirm_password,
        } => account::register(&ctx, name, email, password, confirm_password).await?,
        Commands::Logout => account::logout(&ctx),
        Commands::Whoami => account::whoami(&ctx),
        Commands::Profile { name, email } => account::update_profile(&ctx, name, email).await,
        Commands::Agents { command } => agents::run(&ctx, command).await?,
        Commands::Teams { command } => teams::run(&ctx, command).await?,
        Commands::Conversations { command } => conversations::run(&ctx, command).await?,
    };

    // a 401 anywhere has already cleared the session and redirected
    if requested.requires_auth() && history.current() == Some(Route::Login) {
        eprintln!("session expired; run `agentput login` again");
    }

    Ok(exit_code(&outcome))
}

fn exit_code(outcome: &Outcome) -> ExitCode {
    if outcome.is_done() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
