//! Task list command.
//!
//! With a filter argument, selects it as the sole active filter
//! (persisting the UI state) before rendering; without one, renders
//! under the currently active filter.

use crate::libs::messages::Message;
use crate::libs::state::UiState;
use crate::libs::task::TaskFilter;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter to make active: all, active, or completed
    #[arg(value_enum)]
    filter: Option<TaskFilter>,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let mut controller = super::controller()?;

    if let Some(filter) = args.filter {
        controller.select_filter(filter);
        UiState { filter }.save()?;
        msg_debug!(Message::FilterSelected(filter.to_string()));
    }

    msg_print!(controller.refresh().await);

    Ok(())
}
