use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::pager::PagerOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Site-wide pager defaults, overridable per template call.
    #[serde(default)]
    pub pager: PagerOptions,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// JSON file with the orders listed by the demo pages.
    #[serde(default = "default_orders_path")]
    pub orders_path: PathBuf,
    /// Orders per page (default 5).
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            orders_path: default_orders_path(),
            page_size: default_page_size(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot produce a working demo.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.demo.page_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "demo.page_size must be positive, got {}",
                self.demo.page_size
            )));
        }
        if self.pager.maximum_page_number < 0 {
            return Err(ConfigError::Invalid(format!(
                "pager.maximum_page_number must not be negative, got {}",
                self.pager.maximum_page_number
            )));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

// Default value functions

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_orders_path() -> PathBuf {
    PathBuf::from("data/orders.json")
}

fn default_page_size() -> i64 {
    5
}
