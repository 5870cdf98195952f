// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration management.
//!
//! Configuration is stored in `<config_dir>/ticketboard/config.toml` and includes:
//! - `api_url`: Base URL of the ticket backend
//! - `timeout_secs`: Per-request timeout
//! - `health_interval_secs`: Period of `tb health --watch`
//! - `token_path`: Optional location of the stored bearer token
//!
//! A missing file means defaults. `TICKETBOARD_API_URL` overrides `api_url`,
//! and the `--api-url` flag overrides both.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::health;
use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
const APP_DIR_NAME: &str = "ticketboard";
const CONFIG_FILE_NAME: &str = "config.toml";
const TOKEN_FILE_NAME: &str = "token";

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Base URL of the backend (http or https).
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds (default: 15).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Health polling period in seconds (default: 30).
    #[serde(default = "default_health_interval_secs")]
    pub health_interval_secs: u64,
    /// Token file, absolute or relative to the config directory.
    #[serde(default)]
    pub token_path: Option<PathBuf>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_health_interval_secs() -> u64 {
    health::DEFAULT_INTERVAL.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            health_interval_secs: default_health_interval_secs(),
            token_path: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text. Missing keys take defaults.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Loads configuration from the given directory.
    ///
    /// Returns defaults if the directory has no `config.toml`.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        Config::parse(&content)
    }

    /// Applies API URL overrides. The flag wins over the environment.
    pub fn with_api_url(mut self, env_url: Option<String>, flag_url: Option<String>) -> Self {
        if let Some(url) = flag_url.or(env_url) {
            self.api_url = url;
        }
        self
    }

    /// Checks that the URL is http(s) and durations are non-zero.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api_url).map_err(|e| {
            Error::Config(format!("invalid api_url '{}': {}", self.api_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "invalid api_url '{}': must be http:// or https://",
                self.api_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be at least 1".to_string()));
        }
        if self.health_interval_secs == 0 {
            return Err(Error::Config(
                "health_interval_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn health_interval(&self) -> Duration {
        Duration::from_secs(self.health_interval_secs)
    }

    /// Resolves the token file against the config directory.
    pub fn token_path(&self, config_dir: &Path) -> PathBuf {
        match &self.token_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => config_dir.join(path),
            None => config_dir.join(TOKEN_FILE_NAME),
        }
    }
}

/// Find the configuration directory.
///
/// `TICKETBOARD_CONFIG_DIR` wins; otherwise `ticketboard/` under the
/// platform config directory.
pub fn find_config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::config_dir() {
        return Ok(dir);
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| {
            Error::Config(format!(
                "cannot determine config directory\n  hint: set {}",
                env::vars::TICKETBOARD_CONFIG_DIR
            ))
        })
}

/// Loads the configuration with environment and flag overrides applied.
pub fn resolve(config_dir: &Path, flag_url: Option<String>) -> Result<Config> {
    let config = Config::load(config_dir)?.with_api_url(env::api_url(), flag_url);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
