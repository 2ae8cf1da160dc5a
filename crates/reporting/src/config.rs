//! Reporter configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable holding the submit timeout in milliseconds.
pub const SUBMIT_TIMEOUT_ENV: &str = "NUISANCE_SUBMIT_TIMEOUT_MS";

/// Error returned for unusable reporter configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds an unparseable value.
    #[error("{var} must be a number of milliseconds or \"off\", got {value:?}")]
    InvalidEnv {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
    },

    /// A timeout of zero would fail every submission.
    #[error("submit timeout must be greater than zero")]
    ZeroTimeout,
}

/// Reporter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Upper bound on one collaborator call in milliseconds; `None` waits
    /// indefinitely.
    pub submit_timeout_ms: Option<u64>,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            submit_timeout_ms: Some(10_000),
        }
    }
}

impl ReporterConfig {
    /// Reads [`SUBMIT_TIMEOUT_ENV`] over the defaults.
    ///
    /// `off`, `none` or an empty value disable the timeout.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ReporterConfig::from_env`], reading variables through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = var(SUBMIT_TIMEOUT_ENV) {
            config.submit_timeout_ms = match raw.trim().to_ascii_lowercase().as_str() {
                "" | "off" | "none" => None,
                millis => Some(millis.parse().map_err(|_| ConfigError::InvalidEnv {
                    var: SUBMIT_TIMEOUT_ENV,
                    value: raw.clone(),
                })?),
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Development configuration (generous timeout for local collaborators)
    #[must_use]
    pub fn development() -> Self {
        Self {
            submit_timeout_ms: Some(30_000),
        }
    }

    /// Production configuration (tight timeout)
    #[must_use]
    pub fn production() -> Self {
        Self {
            submit_timeout_ms: Some(5_000),
        }
    }

    /// Sets the submit timeout.
    #[must_use]
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Disables the submit timeout.
    #[must_use]
    pub fn without_submit_timeout(mut self) -> Self {
        self.submit_timeout_ms = None;
        self
    }

    /// The submit timeout, if any.
    #[must_use]
    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_ms.map(Duration::from_millis)
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.submit_timeout_ms == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
