use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::debugger::DEFAULT_TAG;

pub const DEBUG_ENV: &str = "PROXYCACHE_DEBUG";
pub const TAG_ENV: &str = "PROXYCACHE_LOG_TAG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid debug flag value: {0}")]
    InvalidFlag(String),

    #[error("default tag must not be empty")]
    EmptyTag,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    pub enabled: bool,
    pub default_tag: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_tag: DEFAULT_TAG.to_string(),
        }
    }
}

impl DebugConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(DEBUG_ENV).ok().as_deref(),
            std::env::var(TAG_ENV).ok().as_deref(),
        )
    }

    /// Build a config from raw variable values. Bad values are reported and
    /// replaced with defaults.
    pub fn from_vars(debug: Option<&str>, tag: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(value) = debug {
            match parse_flag(value) {
                Ok(enabled) => config.enabled = enabled,
                Err(error) => {
                    log::warn!("{error}, keeping debug logging enabled");
                }
            }
        }

        if let Some(value) = tag {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                log::warn!("{TAG_ENV} is empty, using default tag {DEFAULT_TAG}");
            } else {
                config.default_tag = trimmed.to_string();
            }
        }

        config
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_tag.trim().is_empty() {
            return Err(ConfigError::EmptyTag);
        }

        Ok(())
    }
}

pub fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(value.to_string())),
    }
}
