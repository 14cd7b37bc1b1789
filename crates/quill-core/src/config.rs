//! Configuration for quote sources and the failover loop.
//!
//! Configuration is read from `~/.config/quill/config.toml` (or the platform
//! equivalent) unless a path is given explicitly. A missing default file means
//! defaults; missing fields inside a file also fall back to defaults.
//!
//! ```toml
//! [sources]
//! quotable_url = "https://api.quotable.io/random"
//! typefit_url = "https://type.fit/api/quotes"
//! tags_url = "https://api.quotable.io/tags"
//! timeout_ms = 10000
//!
//! [retry]
//! max_retries_per_adapter = 2
//! delay_ms = 1500
//! reset_failures_on_success = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adapters::{DEFAULT_QUOTABLE_URL, DEFAULT_TYPEFIT_URL};
use crate::categories::DEFAULT_TAGS_URL;
use crate::error::{ConfigError, ValidationError};
use crate::http_client::DEFAULT_TIMEOUT_MS;
use crate::retry::{RetryPolicy, DEFAULT_MAX_RETRIES_PER_ADAPTER, DEFAULT_RETRY_DELAY};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuillConfig {
    pub sources: SourcesConfig,
    pub retry: RetryConfig,
}

/// Endpoints and transport settings for the remote providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub quotable_url: String,
    pub typefit_url: String,
    pub tags_url: String,
    pub timeout_ms: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            quotable_url: String::from(DEFAULT_QUOTABLE_URL),
            typefit_url: String::from(DEFAULT_TYPEFIT_URL),
            tags_url: String::from(DEFAULT_TAGS_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Failover settings, converted into a [`RetryPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_retries_per_adapter: u32,
    pub delay_ms: u64,
    pub reset_failures_on_success: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries_per_adapter: DEFAULT_MAX_RETRIES_PER_ADAPTER,
            delay_ms: DEFAULT_RETRY_DELAY.as_millis() as u64,
            reset_failures_on_success: true,
        }
    }
}

impl QuillConfig {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// An explicit path must exist; the default one may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load_default(),
        }
    }

    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Self::default_config_path()?;
        if !path.exists() {
            tracing::debug!("no config file at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: QuillConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path: `<config_dir>/quill/config.toml`.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("quill").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.retry.max_retries_per_adapter == 0 {
            return Err(ValidationError::ZeroRetryBudget);
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries_per_adapter: self.retry.max_retries_per_adapter.max(1),
            delay: Duration::from_millis(self.retry.delay_ms),
            reset_failures_on_success: self.retry.reset_failures_on_success,
        }
    }
}
