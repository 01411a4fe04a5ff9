//! Application configuration.
//!
//! Settings live as pretty-printed JSON in `config.json` inside the data
//! directory. Every section is optional; missing values fall back to
//! defaults. Environment variables (also read from `.env`) override the file,
//! and command line flags override both.
//!
//! | Variable              | Overrides             |
//! |-----------------------|-----------------------|
//! | `SHARELIST_HOST`      | `server.host`         |
//! | `SHARELIST_PORT`      | `server.port`         |
//! | `SHARELIST_DB`        | `database.path`       |
//! | `SHARELIST_SOLO_DB`   | `database.solo_path`  |

use super::data_storage::DataStorage;
use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_HOST: &str = "SHARELIST_HOST";
pub const ENV_PORT: &str = "SHARELIST_PORT";
pub const ENV_DB: &str = "SHARELIST_DB";
pub const ENV_SOLO_DB: &str = "SHARELIST_SOLO_DB";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DatabaseConfig {
    /// Multi-user database file; the data directory's `sharelist.db` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Solo mode database file; the data directory's `dashboard.db` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solo_path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub cookie_name: String,
    /// Session lifetime in seconds.
    pub max_age: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            cookie_name: "sharelist_session".to_string(),
            max_age: 86_400,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|err| msg_error_anyhow!(Message::ConfigParseFailed(err.to_string())))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Applies overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.apply_env(|key| env::var(key).ok())
    }

    /// Applies overrides from `lookup`. Values that do not parse are reported and skipped.
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup(ENV_HOST).filter(|h| !h.trim().is_empty()) {
            self.server.get_or_insert_with(ServerConfig::default).host = host.trim().to_string();
        }
        if let Some(port) = lookup(ENV_PORT) {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server.get_or_insert_with(ServerConfig::default).port = port,
                Err(_) => msg_warning!(Message::InvalidEnvValue(ENV_PORT.to_string(), port)),
            }
        }
        if let Some(path) = lookup(ENV_DB).filter(|p| !p.trim().is_empty()) {
            self.database.get_or_insert_with(DatabaseConfig::default).path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(ENV_SOLO_DB).filter(|p| !p.trim().is_empty()) {
            self.database.get_or_insert_with(DatabaseConfig::default).solo_path = Some(PathBuf::from(path));
        }
        self
    }

    pub fn server_settings(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn session_settings(&self) -> SessionConfig {
        self.session.clone().unwrap_or_default()
    }

    /// Database file for the given mode, falling back to the data directory.
    pub fn database_path(&self, solo: bool) -> Result<PathBuf> {
        let configured = self
            .database
            .as_ref()
            .and_then(|db| if solo { db.solo_path.clone() } else { db.path.clone() });

        match configured {
            Some(path) => Ok(path),
            None => Db::default_path(solo),
        }
    }

    /// Interactive setup wizard; the current file provides the defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [
            ConfigModule {
                key: "server".to_string(),
                name: "Server".to_string(),
            },
            ConfigModule {
                key: "database".to_string(),
                name: "Database".to_string(),
            },
            ConfigModule {
                key: "session".to_string(),
                name: "Session".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server_settings();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        host: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerHost.to_string())
                            .default(default.host)
                            .interact_text()?,
                        port: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerPort.to_string())
                            .default(default.port)
                            .interact_text()?,
                    });
                }
                "database" => {
                    let default = config.database.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDatabase);
                    config.database = Some(DatabaseConfig {
                        path: prompt_path(Message::PromptDatabasePath, default.path)?,
                        solo_path: prompt_path(Message::PromptSoloDatabasePath, default.solo_path)?,
                    });
                }
                "session" => {
                    let default = config.session_settings();
                    msg_print!(Message::ConfigModuleSession);
                    config.session = Some(SessionConfig {
                        cookie_name: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCookieName.to_string())
                            .default(default.cookie_name)
                            .interact_text()?,
                        max_age: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSessionMaxAge.to_string())
                            .default(default.max_age)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Asks for an optional path; an empty answer keeps the built-in location.
fn prompt_path(prompt: Message, default: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.map(|p| p.display().to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}
