//! Application configuration management
//!
//! This module handles loading configuration from TOML files. All
//! configuration is validated at startup; a missing file falls back to the
//! documented defaults.

use crate::core::constants::route;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default server port
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
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

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Application configuration loaded from TOML files
///
/// All values have defaults, so the server starts without a configuration
/// file present.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Logging level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let server = ServerConfig::default();
        Self {
            host: server.host,
            port: server.port,
            log_level: server.log_level,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the TOML file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        Ok(Config {
            host: config.server.host,
            port: config.server.port,
            log_level: config.server.log_level,
        })
    }

    /// Load configuration from environment and config file
    ///
    /// Looks for config.toml in the current directory by default; the path
    /// can be overridden with CONFIG_PATH. A missing file yields defaults.
    pub fn from_env() -> Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        if Path::new(&config_path).exists() {
            Self::from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Documentation URL printed in the startup banner
    pub fn docs_url(&self) -> String {
        format!("http://localhost:{}{}", self.port, route::SWAGGER_UI)
    }
}
