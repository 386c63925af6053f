pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod toggle;

use crate::api::TaskApi;
use crate::libs::config::Config;
use crate::libs::controller::TaskController;
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::state::UiState;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "Show the task list, optionally selecting the active filter")]
    List(list::ListArgs),
    #[command(about = "Toggle a task's completion flag", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        init_tracing();

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
        }
    }
}

/// Builds the controller every command operates on: API client from the
/// configuration, active filter from the persisted UI state.
pub fn controller() -> Result<TaskController> {
    let config = Config::read()?;
    Ok(TaskController::new(TaskApi::new(&config), UiState::read().filter))
}

/// Installs the tracing subscriber when debug mode is enabled; in normal
/// mode the message macros print directly to the console.
fn init_tracing() {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
            .init();
    }
}
