//! Application configuration.
//!
//! Settings are stored as JSON in the platform data directory and edited
//! through the interactive `init` wizard. The only module today is the task
//! server connection; the section is optional so the application runs with
//! zero setup against the default local development server. The
//! `TASKMATE_API_URL` environment variable overrides whatever the file says.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const API_URL_ENV: &str = "TASKMATE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Task server connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the task management API.
    pub api_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive configuration wizard. Pre-fills existing values so
    /// re-running only changes what the user edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let default = config.server.clone().unwrap_or(ServerConfig {
            api_url: DEFAULT_API_URL.to_string(),
        });
        msg_print!(Message::ConfigServerSection);
        config.server = Some(ServerConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
        });

        Ok(config)
    }

    /// Resolves the API base URL: environment variable first, then the
    /// config file, then the local development default.
    pub fn api_url(&self) -> String {
        env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .or_else(|| self.server.as_ref().map(|s| s.api_url.clone()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}
