use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Suffix inserted before the extension when backing up the original
    /// file, e.g. "movie.srt" -> "movie_old.srt"
    #[serde(default = "default_backup_suffix")]
    pub backup_suffix: String,

    /// Subtitle file extension the tool accepts
    #[serde(default = "default_subtitle_extension")]
    pub subtitle_extension: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    // @validates: Configuration values after load and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.backup_suffix.is_empty() {
            return Err(anyhow!(
                "backup_suffix must not be empty, the backup would overwrite the original file"
            ));
        }

        if self.backup_suffix.contains(std::path::MAIN_SEPARATOR) {
            return Err(anyhow!(
                "backup_suffix must not contain a path separator: '{}'",
                self.backup_suffix
            ));
        }

        if self.subtitle_extension.is_empty() || self.subtitle_extension.starts_with('.') {
            return Err(anyhow!(
                "subtitle_extension must be a bare extension like 'srt', got '{}'",
                self.subtitle_extension
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            backup_suffix: default_backup_suffix(),
            subtitle_extension: default_subtitle_extension(),
            log_level: LogLevel::default(),
        }
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_backup_suffix() -> String {
    "_old".to_string()
}

fn default_subtitle_extension() -> String {
    "srt".to_string()
}
