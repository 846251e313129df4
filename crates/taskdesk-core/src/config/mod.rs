//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Reject empty or unparseable chrono format strings
fn check_format(label: &str, value: &str) -> anyhow::Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} cannot be empty", label));
    }
    if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
        return Err(anyhow!("Invalid {}: {}", label.to_lowercase(), value));
    }
    Ok(())
}

/// Taskdesk configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tasks: TasksConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    /// Check that a task's project and user exist and match before storing it
    pub verify_references: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono format string for creation timestamps
    pub timestamp_format: String,
    /// chrono format string for project start dates
    pub date_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for taskdesk targets when RUST_LOG is unset
    pub level: String,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            verify_references: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("TASKDESK_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("taskdesk")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or use defaults if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            Self::from_toml(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create config directory: {}", dir.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(anyhow!(
                "Invalid logging level: {}. Valid options: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            ));
        }
        check_format("Timestamp format", &self.display.timestamp_format)?;
        check_format("Date format", &self.display.date_format)?;
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "tasks.verify_references" => Ok(self.tasks.verify_references.to_string()),
            "display.timestamp_format" => Ok(self.display.timestamp_format.clone()),
            "display.date_format" => Ok(self.display.date_format.clone()),
            "logging.level" => Ok(self.logging.level.clone()),
            _ => Err(anyhow!(
                "Unknown configuration key: {}. Use `taskdesk config list` to see available keys.",
                key
            )),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "tasks.verify_references" => {
                self.tasks.verify_references = value
                    .parse()
                    .with_context(|| format!("Invalid verify_references value: {}", value))?;
            }
            "display.timestamp_format" => {
                check_format("Timestamp format", value)?;
                self.display.timestamp_format = value.to_string();
            }
            "display.date_format" => {
                check_format("Date format", value)?;
                self.display.date_format = value.to_string();
            }
            "logging.level" => {
                let level = value.to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(anyhow!(
                        "Invalid logging level: {}. Valid options: {}",
                        value,
                        LOG_LEVELS.join(", ")
                    ));
                }
                self.logging.level = level;
            }
            _ => {
                return Err(anyhow!(
                    "Unknown configuration key: {}. Use `taskdesk config list` to see available keys.",
                    key
                ));
            }
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        let keys = [
            "tasks.verify_references",
            "display.timestamp_format",
            "display.date_format",
            "logging.level",
        ];

        keys.into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}
