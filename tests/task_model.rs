#[cfg(test)]
mod tests {
    use taskdeck::libs::task::{Task, TaskFilter, TaskForm, DEFAULT_PRIORITY};

    fn sample_form() -> TaskForm {
        TaskForm {
            title: "Write report".to_string(),
            description: "Quarterly numbers".to_string(),
            priority: "High".to_string(),
            due_date: "2026-09-01".to_string(),
        }
    }

    #[test]
    fn test_form_default_is_cleared_form() {
        let form = TaskForm::default();
        assert_eq!(form.title, "");
        assert_eq!(form.description, "");
        assert_eq!(form.priority, DEFAULT_PRIORITY);
        assert_eq!(form.due_date, "");
    }

    #[test]
    fn test_form_into_task_starts_incomplete() {
        let task = sample_form().into_task();
        assert_eq!(task.id, None);
        assert_eq!(task.title, "Write report");
        assert_eq!(task.due_date, "2026-09-01");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_serializes_without_id_before_creation() {
        let task = sample_form().into_task();
        let body = serde_json::to_value(&task).unwrap();

        assert!(body.get("id").is_none());
        assert_eq!(body["title"], "Write report");
        assert_eq!(body["due_date"], "2026-09-01");
        assert_eq!(body["completed"], false);
    }

    #[test]
    fn test_task_serializes_id_after_creation() {
        let task = Task {
            id: Some(42),
            ..sample_form().into_task()
        };
        let body = serde_json::to_value(&task).unwrap();
        assert_eq!(body["id"], 42);
    }

    #[test]
    fn test_task_deserializes_with_missing_optional_fields() {
        let task: Task = serde_json::from_str(r#"{"id": 3, "title": "Pay rent"}"#).unwrap();
        assert_eq!(task.id, Some(3));
        assert_eq!(task.description, "");
        assert_eq!(task.priority, "");
        assert_eq!(task.due_date, "");
        assert!(!task.completed);
    }

    #[test]
    fn test_filter_wire_values() {
        assert_eq!(TaskFilter::All.as_str(), "all");
        assert_eq!(TaskFilter::Active.as_str(), "active");
        assert_eq!(TaskFilter::Completed.as_str(), "completed");
        assert_eq!(TaskFilter::default(), TaskFilter::All);
    }
}
