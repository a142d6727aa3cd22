//! Configuration management.
//!
//! Settings are stored as JSON in the platform data directory. The `init`
//! wizard walks the user through picking a storage backend and a subject
//! name; `open_store` turns the saved choice into a live record store.

use crate::libs::data_storage::DataStorage;
use crate::libs::json_store::JsonRecordStore;
use crate::libs::messages::Message;
use crate::libs::store::RecordStore;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Subject used when no user name is configured (single-tenant deployment).
pub const DEFAULT_SUBJECT: &str = "default";

/// Which record store adapter to open.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Json,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    /// Identity the records belong to; absent in single-user setups.
    pub subject: Option<String>,
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads the saved configuration, or returns defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(&config_path)?;
        serde_json::from_reader(file).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(&config_path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(&config_path)?;
        }
        Ok(())
    }

    /// Interactive setup wizard.
    pub fn init() -> Result<Config> {
        let backends = ["sqlite", "json"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStorageBackend.to_string())
            .items(&backends)
            .default(0)
            .interact()?;
        let backend = match selection {
            1 => StorageBackend::Json,
            _ => StorageBackend::Sqlite,
        };

        let subject: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSubject.to_string())
            .default(DEFAULT_SUBJECT.to_string())
            .interact_text()?;

        Ok(Config {
            subject: Some(subject),
            storage: Some(StorageConfig { backend }),
        })
    }

    /// The subject identity clock actions are recorded under.
    pub fn subject(&self) -> String {
        self.subject
            .clone()
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string())
    }

    /// Opens the configured record store adapter.
    pub fn open_store(&self) -> Result<Box<dyn RecordStore>> {
        let backend = self.storage.as_ref().map(|s| s.backend).unwrap_or_default();
        Ok(match backend {
            StorageBackend::Sqlite => Box::new(crate::db::records::Records::new()?),
            StorageBackend::Json => Box::new(JsonRecordStore::new()?),
        })
    }
}
