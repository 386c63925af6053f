use crate::libs::messages::Message;
use crate::libs::task::Task;
use prettytable::{row, Table};

/// Renders task lists for the terminal.
///
/// Rendering returns strings rather than printing so the output can be
/// asserted on in tests and routed through the message macros.
pub struct View {}

impl View {
    /// Renders the task collection as a table, or the empty-state
    /// placeholder when the collection is empty.
    pub fn tasks(tasks: &[Task]) -> String {
        if tasks.is_empty() {
            return Message::NoTasksFound.to_string();
        }

        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "PRIORITY", "DUE DATE", "STATUS"]);
        for task in tasks {
            let description = match task.description.is_empty() {
                true => Message::NoDescription.to_string(),
                false => task.description.clone(),
            };
            let due_date = match task.due_date.is_empty() {
                true => Message::NoDueDate.to_string(),
                false => task.due_date.clone(),
            };
            let status = match task.completed {
                true => "✔ done",
                false => "",
            };
            table.add_row(row![
                task.id.map(|id| id.to_string()).unwrap_or_default(),
                task.title,
                description,
                task.priority,
                due_date,
                status
            ]);
        }

        table.to_string()
    }

    /// Placeholder shown when the list fetch fails.
    pub fn error() -> String {
        Message::ErrorLoadingTasks.to_string()
    }
}
