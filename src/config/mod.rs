//! Configuration management for the dojo client
//!
//! The configuration is read once at startup and shared read-only for the
//! rest of the process.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::client::{Endpoint, EndpointPaths};
use crate::error::{ConfigError, Result};

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Primary backend base URL
    pub base_url: String,

    /// Alternate base URLs, probed in order when the primary is unreachable
    pub fallback_urls: Vec<String>,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Per-candidate health probe timeout in milliseconds
    pub health_timeout_ms: u64,

    /// Attempts per request before giving up on transient failures
    pub retries: u32,

    /// Linear backoff step between attempts, in milliseconds
    pub retry_delay_ms: u64,

    /// `chrono` format used for dates the client fills in itself
    pub date_format: String,

    /// Authenticated path overrides keyed by endpoint name
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub endpoints: HashMap<Endpoint, String>,

    /// Public path overrides keyed by endpoint name
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub public_endpoints: HashMap<Endpoint, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            fallback_urls: vec![
                "http://10.0.2.2:5000/api".to_string(),
                "http://127.0.0.1:5000/api".to_string(),
            ],
            timeout_ms: 10_000,
            health_timeout_ms: 5_000,
            retries: 3,
            retry_delay_ms: 500,
            date_format: "%Y-%m-%d".to_string(),
            endpoints: HashMap::new(),
            public_endpoints: HashMap::new(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".dojo").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields the built-in
    /// defaults.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(&default)
                } else {
                    log::debug!("No config at {}, using defaults", default.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> Result<()> {
        for url in std::iter::once(&self.base_url).chain(self.fallback_urls.iter()) {
            if url.trim().is_empty() {
                return Err(ConfigError::Invalid("base URL must not be empty".to_string()).into());
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "base URL must start with http:// or https://: {url}"
                ))
                .into());
            }
        }
        if self.timeout_ms == 0 || self.health_timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeouts must be positive".to_string()).into());
        }
        if !is_valid_date_format(&self.date_format) {
            return Err(ConfigError::Invalid(format!(
                "date_format is not a valid strftime pattern: {:?}",
                self.date_format
            ))
            .into());
        }
        Ok(())
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Health probe timeout as a `Duration`
    pub fn health_timeout(&self) -> Duration {
        Duration::from_millis(self.health_timeout_ms)
    }

    /// Backoff step as a `Duration`
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Concrete paths for an endpoint, with overrides applied
    pub fn paths(&self, endpoint: Endpoint) -> EndpointPaths {
        let mut paths = EndpointPaths::from(endpoint);
        if let Some(path) = self.endpoints.get(&endpoint) {
            paths.authenticated = path.clone();
        }
        if let Some(path) = self.public_endpoints.get(&endpoint) {
            paths.public = Some(path.clone());
        }
        paths
    }

    /// Build a config pointing at a single base URL with no fallbacks and
    /// no backoff delay.
    #[cfg(test)]
    pub fn for_base(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            fallback_urls: Vec::new(),
            timeout_ms: 2_000,
            health_timeout_ms: 1_000,
            retries: 2,
            retry_delay_ms: 0,
            ..Self::default()
        }
    }
}

/// A pattern chrono can render: non-blank with no unknown specifiers
fn is_valid_date_format(format: &str) -> bool {
    !format.trim().is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
