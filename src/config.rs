use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const KEYS: [&str; 2] = ["seed_items", "log_level"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub seed_items: Vec<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_items: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_file_path()?)
    }

    /// Like [`Config::load`], but a missing file means defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::load() {
            Ok(config) => Ok(config),
            Err(ConfigError::ConfigNotFound) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::ConfigNotFound);
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        validate_log_level(&config.log_level)?;

        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&get_config_file_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = toml::to_string(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(config_path, content)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// `seed_items` takes a comma-separated list; empty entries are dropped.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "seed_items" => {
                self.seed_items = value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "log_level" => {
                let level = value.trim();
                validate_log_level(level)?;
                self.log_level = level.to_string();
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "seed_items" => Ok(self.seed_items.join(",")),
            "log_level" => Ok(self.log_level.clone()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }
}

// An unknown word would otherwise be read as a target filter and silence logging.
fn validate_log_level(level: &str) -> Result<(), ConfigError> {
    LevelFilter::from_str(level)
        .map(|_| ())
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("cmdlist").join("config.toml"))
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration not found. Run 'cmdlist config set <key> <value>' to create one.")]
    ConfigNotFound,

    #[error("Could not find config directory")]
    ConfigDirNotFound,

    #[error("Unknown configuration key '{0}'. Supported keys: {keys}", keys = KEYS.join(", "))]
    UnknownKey(String),

    #[error("Invalid log level '{0}'. Use one of: off, error, warn, info, debug, trace")]
    InvalidLogLevel(String),

    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to serialize config: {0}")]
    SerializeError(String),
}
