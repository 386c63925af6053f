#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskCreateFailed(String),
    TaskUpdateFailed(String),
    TaskDeleteFailed(String),
    TasksFetchFailed(String),
    TaskNotFoundWithId(i64),
    TitleRequired,

    // === LIST PLACEHOLDERS ===
    NoTasksFound,
    ErrorLoadingTasks,
    NoDescription,
    NoDueDate,

    // === FILTER MESSAGES ===
    FilterSelected(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    PromptSelectModules,
    PromptServerApiUrl,

    // === FORM PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskPriority,
    PromptTaskDueDate,
}
