//! Configuration management for the shiftlog application.
//!
//! Settings live in a pretty-printed JSON file (`config.json`) inside the
//! platform data directory resolved by [`DataStorage`]. A missing file is not
//! an error: every field has a default, so the tool works with zero setup.
//!
//! ## Fields
//!
//! - **database**: optional path of the SQLite file; defaults to
//!   `shiftlog.db` in the data directory
//! - **bind**: socket address of the HTTP API (`127.0.0.1:5000`)
//! - **default_site**: site location the CLI fills in when `--site` is omitted
//!
//! ## Environment overrides
//!
//! [`Config::load`] applies environment variables on top of the file. A `.env`
//! file in the working directory is read at startup, so deployments can keep
//! these next to the binary:
//!
//! - `SHIFTLOG_DB`: database path
//! - `PORT`: port of the HTTP API (the host part of `bind` is kept)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftlog::libs::config::Config;
//!
//! let config = Config::load()?;
//! println!("API on {}", config.bind_addr()?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::entry::DEFAULT_SITE;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Address the HTTP API binds to when nothing else is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

pub const ENV_DATABASE: &str = "SHIFTLOG_DB";
pub const ENV_PORT: &str = "PORT";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Database file; `None` means the default file in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_site")]
    pub default_site: String,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_site() -> String {
    DEFAULT_SITE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            bind: default_bind(),
            default_site: default_site(),
        }
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does
    /// not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Reads the configuration file and applies environment overrides.
    pub fn load() -> Result<Config> {
        Ok(Self::read()?.with_env())
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Applies `SHIFTLOG_DB` and `PORT` on top of the current values.
    pub fn with_env(mut self) -> Self {
        if let Ok(path) = env::var(ENV_DATABASE) {
            if !path.trim().is_empty() {
                self.database = Some(PathBuf::from(path));
            }
        }

        if let Ok(port) = env::var(ENV_PORT) {
            match port.trim().parse::<u16>() {
                Ok(port) => {
                    let ip = self
                        .bind
                        .parse::<SocketAddr>()
                        .map(|addr| addr.ip())
                        .unwrap_or(IpAddr::from([127, 0, 0, 1]));
                    self.bind = SocketAddr::new(ip, port).to_string();
                }
                Err(_) => {
                    msg_warning!(Message::InvalidPortIgnored(port));
                }
            }
        }

        self
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|_| msg_error_anyhow!(Message::InvalidBindAddress(self.bind.clone())))
    }

    /// Site for a new or edited entry: the given one, else the configured default.
    pub fn site_or_default(&self, site: Option<String>) -> String {
        site.map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.default_site.clone())
    }

    /// Resolves the database file, defaulting to the data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    /// Interactive setup wizard seeded with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigWizardHeader);

        let database: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(
                current
                    .database
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        let bind: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBindAddress.to_string())
            .default(current.bind.clone())
            .validate_with(|input: &String| -> Result<(), String> {
                input
                    .parse::<SocketAddr>()
                    .map(|_| ())
                    .map_err(|_| Message::InvalidBindAddress(input.clone()).to_string())
            })
            .interact_text()?;

        let site: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultSite.to_string())
            .default(current.default_site.clone())
            .interact_text()?;

        Ok(Config {
            database: Some(database.trim())
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            bind,
            default_site: Some(site.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(default_site),
        })
    }
}
