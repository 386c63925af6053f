#[cfg(test)]
mod tests {
    use taskdeck::libs::state::UiState;
    use taskdeck::libs::task::TaskFilter;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StateTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StateTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StateTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(StateTestContext)]
    #[test]
    fn test_read_without_file_defaults_to_all(_ctx: &mut StateTestContext) {
        assert_eq!(UiState::read().filter, TaskFilter::All);
    }

    #[test_context(StateTestContext)]
    #[test]
    fn test_selected_filter_survives_round_trip(_ctx: &mut StateTestContext) {
        UiState {
            filter: TaskFilter::Completed,
        }
        .save()
        .unwrap();

        assert_eq!(UiState::read().filter, TaskFilter::Completed);
    }

    #[test_context(StateTestContext)]
    #[test]
    fn test_corrupt_state_file_falls_back_to_default(_ctx: &mut StateTestContext) {
        let path = taskdeck::libs::data_storage::DataStorage::new()
            .get_path(taskdeck::libs::state::STATE_FILE_NAME)
            .unwrap();
        std::fs::write(&path, "{not json").unwrap();

        assert_eq!(UiState::read().filter, TaskFilter::All);
    }
}
