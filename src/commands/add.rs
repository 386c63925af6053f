//! Task creation command.
//!
//! Collects the form fields either from flags or through interactive
//! prompts, then submits them through the controller. Title validation
//! happens in the controller before any network call; a rejected or
//! failed submission leaves the entered values with the user for retry.

use crate::libs::messages::Message;
use crate::libs::task::{TaskForm, DEFAULT_PRIORITY, PRIORITIES};
use crate::msg_print;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title (prompts interactively when omitted)
    #[arg(short, long)]
    title: Option<String>,

    /// Task description
    #[arg(short, long)]
    description: Option<String>,

    /// Priority label (Low, Medium, High)
    #[arg(short, long)]
    priority: Option<String>,

    /// Due date
    #[arg(long)]
    due: Option<String>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let mut form = match args.title {
        Some(title) => TaskForm {
            title,
            description: args.description.unwrap_or_default(),
            priority: args.priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            due_date: args.due.unwrap_or_default(),
        },
        None => prompt_form()?,
    };

    let controller = super::controller()?;
    let rendered = controller.submit(&mut form).await?;
    msg_print!(rendered);

    Ok(())
}

/// Interactive form for the new-task fields. Empty inputs are allowed
/// here; the controller rejects an empty title.
fn prompt_form() -> Result<TaskForm> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .allow_empty(true)
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let priority = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&PRIORITIES)
        .default(0)
        .interact()?;

    let due_date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(TaskForm {
        title,
        description,
        priority: PRIORITIES[priority].to_string(),
        due_date,
    })
}
