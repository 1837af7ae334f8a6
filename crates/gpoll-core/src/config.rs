use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::backoff::{BackoffPolicy, DEFAULT_RATE_LIMIT_CODES};
use crate::credential::DEFAULT_TOKEN_ENV;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid backoff settings: {0}")]
    InvalidBackoff(String),
}

/// Backoff parameters (optional `[backoff]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackoffConfig {
    /// Interval in milliseconds after a success, and at startup.
    pub base_interval_ms: u64,
    /// Maximum interval in milliseconds while rate limited.
    pub max_interval_ms: u64,
    /// Growth factor per rate-limit error (e.g. 1.5).
    pub multiplier: f64,
    /// Graph API error codes treated as rate limiting.
    pub rate_limit_codes: Vec<i64>,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            base_interval_ms: 2000,
            max_interval_ms: 60_000,
            multiplier: 1.5,
            rate_limit_codes: DEFAULT_RATE_LIMIT_CODES.to_vec(),
        }
    }
}

impl BackoffConfig {
    /// Validate and convert into the runtime policy.
    pub fn to_policy(&self) -> Result<BackoffPolicy, ConfigError> {
        if self.base_interval_ms == 0 {
            return Err(ConfigError::InvalidBackoff(
                "base_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.base_interval_ms > self.max_interval_ms {
            return Err(ConfigError::InvalidBackoff(format!(
                "base_interval_ms ({}) exceeds max_interval_ms ({})",
                self.base_interval_ms, self.max_interval_ms
            )));
        }
        if !self.multiplier.is_finite() || self.multiplier < 1.0 {
            return Err(ConfigError::InvalidBackoff(format!(
                "multiplier must be a finite number >= 1.0, got {}",
                self.multiplier
            )));
        }
        Ok(BackoffPolicy {
            base_interval: Duration::from_millis(self.base_interval_ms),
            max_interval: Duration::from_millis(self.max_interval_ms),
            multiplier: self.multiplier,
            rate_limit_codes: self.rate_limit_codes.clone(),
        })
    }
}

/// Global configuration loaded from `~/.config/gpoll/config.toml`.
///
/// Every field has a default; a missing file means all defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Graph API origin.
    pub api_base: String,
    /// Versioned path segment, e.g. `v19.0`.
    pub api_version: String,
    /// Profile fields requested from the `me` node.
    pub fields: Vec<String>,
    /// Environment variable holding the access token.
    pub token_env: String,
    /// Optional bound on each request in seconds (None = wait indefinitely).
    pub request_timeout_secs: Option<u64>,
    /// Optional backoff tuning; if missing, built-in defaults are used.
    pub backoff: Option<BackoffConfig>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            api_base: "https://graph.facebook.com".to_string(),
            api_version: "v19.0".to_string(),
            fields: vec![
                "id".to_string(),
                "name".to_string(),
                "last_name".to_string(),
            ],
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            request_timeout_secs: None,
            backoff: None,
        }
    }
}

impl PollerConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Backoff policy from the `[backoff]` section, or the defaults.
    pub fn backoff_policy(&self) -> Result<BackoffPolicy, ConfigError> {
        match &self.backoff {
            Some(b) => b.to_policy(),
            None => Ok(BackoffPolicy::default()),
        }
    }
}

/// Default config location. Nothing is created on disk.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gpoll")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from `path`, or from the default location.
///
/// An explicit path must exist. A missing default file yields the defaults.
pub fn load(path: Option<&Path>) -> Result<PollerConfig> {
    match path {
        Some(p) => load_from(p),
        None => {
            let p = config_path()?;
            if !p.exists() {
                tracing::debug!("no config at {}, using defaults", p.display());
                return Ok(PollerConfig::default());
            }
            load_from(&p)
        }
    }
}

fn load_from(path: &Path) -> Result<PollerConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: PollerConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    cfg.backoff_policy()?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
