//! Client configuration.
//!
//! Configuration can be loaded from:
//! - TOML files (default: ~/.config/aquatracker/client.toml)
//! - Environment variables (AQUA_* prefixed)
//!
//! # Example
//!
//! ```rust,no_run
//! use aqua_client::config::ClientConfig;
//!
//! // Load from default path or fall back to env vars
//! let config = ClientConfig::load().expect("Failed to load config");
//!
//! // Or explicitly from a file
//! let config = ClientConfig::from_file(std::path::Path::new("client.toml")).expect("Failed to load");
//!
//! // Or from environment variables
//! let config = ClientConfig::from_env();
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use aqua_core::defaults;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the AquaTracker API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_URL.to_string(),
            timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load from the default config file path, falling back to environment
    /// variables when no file exists.
    pub fn load() -> ConfigResult<Self> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                debug!("Loading client config from {}", path.display());
                return Self::from_file(&path);
            }
        }
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Build from `AQUA_*` environment variables, defaulting anything unset.
    pub fn from_env() -> Self {
        let base_url =
            env::var(defaults::ENV_API_URL).unwrap_or_else(|_| defaults::API_URL.to_string());
        let timeout_secs = env::var(defaults::ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::REQUEST_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "base_url cannot be empty".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "base_url must start with http:// or https://, got: {}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn default_path() -> Option<PathBuf> {
        let home = env::var_os("HOME")?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("aquatracker")
                .join("client.toml"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, defaults::API_URL);
        assert_eq!(config.timeout_secs, defaults::REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let config = ClientConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = ClientConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
            base_url = "https://api.algae.example.com/api"
            timeout_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://api.algae.example.com/api");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }
}
