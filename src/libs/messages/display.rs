//! Display implementation for taskdeck application messages.
//!
//! All user-facing text lives here, in one place, so the rest of the
//! code refers to messages by variant rather than by literal string.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => "Task added successfully".to_string(),
            Message::TaskCreateFailed(e) => format!("Error adding task: {}", e),
            Message::TaskUpdateFailed(e) => format!("Error updating task: {}", e),
            Message::TaskDeleteFailed(e) => format!("Error deleting task: {}", e),
            Message::TasksFetchFailed(e) => format!("Error fetching tasks: {}", e),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TitleRequired => "Please enter a task title".to_string(),

            // === LIST PLACEHOLDERS ===
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::ErrorLoadingTasks => "Error loading tasks".to_string(),
            Message::NoDescription => "No description".to_string(),
            Message::NoDueDate => "No due date".to_string(),

            // === FILTER MESSAGES ===
            Message::FilterSelected(filter) => format!("Filter set to '{}'", filter),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "📡 Server configuration".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptServerApiUrl => "Enter the task API base URL".to_string(),

            // === FORM PROMPTS ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskDueDate => "Due date (empty for none)".to_string(),
        };
        write!(f, "{}", text)
    }
}
