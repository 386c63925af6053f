//! Persisted UI state.
//!
//! Exactly one filter is active at a time, and every command renders
//! under it. A small JSON state file next to the configuration carries
//! the selection across invocations.

use super::data_storage::DataStorage;
use super::task::TaskFilter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const STATE_FILE_NAME: &str = "state.json";

/// UI state surviving between invocations. Currently just the active filter.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub filter: TaskFilter,
}

impl UiState {
    /// Reads the persisted state, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn read() -> UiState {
        let Ok(path) = DataStorage::new().get_path(STATE_FILE_NAME) else {
            return UiState::default();
        };
        fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(STATE_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, &self)?;
        Ok(())
    }
}
