use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Priority options offered by the form, lowest severity first.
pub const PRIORITIES: [&str; 3] = ["Low", "Medium", "High"];

/// Default priority for a cleared form.
pub const DEFAULT_PRIORITY: &str = "Low";

/// A task record as exchanged with the server.
///
/// `id` is assigned by the server and omitted from request bodies until
/// the task has been created. `description` and `due_date` use an empty
/// string for "absent"; the view substitutes placeholders for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
}

/// The submission form for a new task.
///
/// Mirrors the input fields the user fills in before a create request.
/// `default()` is the cleared form: empty fields with the priority reset
/// to its lowest-severity option.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        TaskForm {
            title: String::new(),
            description: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            due_date: String::new(),
        }
    }
}

impl TaskForm {
    /// Builds the create-request body. New tasks always start incomplete.
    pub fn into_task(self) -> Task {
        Task {
            id: None,
            title: self.title,
            description: self.description,
            priority: self.priority,
            due_date: self.due_date,
            completed: false,
        }
    }
}

/// Named view over the task collection, passed to the list endpoint.
///
/// Exactly one filter is active at a time; the active one is persisted
/// as UI state between invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Wire value used in the `filter` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
