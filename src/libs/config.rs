//! Configuration management for the taskdeck client.
//!
//! Settings are stored as JSON in the platform application-data directory
//! and edited through an interactive setup wizard. The only configurable
//! module is the server connection; when it is absent the client falls
//! back to the default API base URL, so the tool works against a local
//! backend with zero setup.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Base URL used when no server module has been configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/tasks";

/// Represents a configurable module in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Task API server connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the task API, including the collection path.
    ///
    /// Example: `http://localhost:5000/api/tasks`
    pub api_url: String,
}

impl ServerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "server".to_string(),
            name: "Server".to_string(),
        }
    }

    /// Interactive setup for the server module, pre-filled with the
    /// existing value (or the default URL) so updates are cheap.
    pub fn init(config: &Option<ServerConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: DEFAULT_API_URL.to_string(),
        });

        msg_print!(Message::ConfigModuleServer);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}

/// Root configuration object.
///
/// Every module is optional; unconfigured modules are omitted from the
/// JSON file and replaced by defaults at runtime.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Task API server connection settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads configuration from the data directory, falling back to the
    /// default configuration when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the available modules, then delegates to each selected
    /// module's own setup routine. Existing values are used as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![ServerConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "server" => config.server = Some(ServerConfig::init(&config.server)?),
                _ => {}
            }
        }

        Ok(config)
    }

    /// Resolved API base URL: the configured server module or the default.
    pub fn api_url(&self) -> String {
        self.server
            .as_ref()
            .map(|server| server.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}
