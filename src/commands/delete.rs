//! Task deletion command.

use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Identifier of the task to delete
    #[arg(required = true)]
    id: i64,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let controller = super::controller()?;
    let rendered = controller.delete(args.id).await;
    msg_print!(rendered);

    Ok(())
}
