//! Completion toggle command.

use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Identifier of the task to toggle
    #[arg(required = true)]
    id: i64,
}

pub async fn cmd(args: ToggleArgs) -> Result<()> {
    let controller = super::controller()?;
    let rendered = controller.toggle(args.id).await?;
    msg_print!(rendered);

    Ok(())
}
