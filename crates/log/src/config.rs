//! Logger configuration
//!
//! Configuration is plain data: build it from a preset, from the
//! environment, or deserialize it from whatever config file the host
//! application already reads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directives (e.g., "info", "debug,nuisance_reporting=trace")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Output stream
    pub writer: Writer,

    /// Display configuration
    pub display: DisplayConfig,

    /// Service name recorded on a root span, if set
    pub service: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            writer: Writer::Stderr,
            display: DisplayConfig::default(),
            service: None,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable, multi-line
    Pretty,
    /// Single-line
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Pretty => write!(f, "pretty"),
            Format::Compact => write!(f, "compact"),
            Format::Json => write!(f, "json"),
        }
    }
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Format::Pretty),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            _ => Err(LogError::Format(s.to_string())),
        }
    }
}

/// Output stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Writer {
    /// Write to stderr
    #[default]
    Stderr,
    /// Write to stdout
    Stdout,
}

/// Display configuration
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Use ANSI colors; `None` enables them when the writer is a terminal
    pub colors: Option<bool>,
    /// Show span list in JSON
    pub span_list: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            colors: None,
            span_list: true,
            flatten: true,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}

impl Config {
    /// Create configuration from environment variables
    ///
    /// | Variable | Effect |
    /// |----------|--------|
    /// | `NUISANCE_LOG` (else `RUST_LOG`) | filter directives |
    /// | `NUISANCE_LOG_FORMAT` | `pretty`, `compact` or `json` |
    /// | `NUISANCE_LOG_TIME` / `_SOURCE` / `_COLORS` | display toggles |
    /// | `NUISANCE_SERVICE` | root span service name |
    ///
    /// An unrecognised format falls back to compact output.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `var`.
    #[must_use]
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = var("NUISANCE_LOG").or_else(|| var("RUST_LOG")) {
            config.level = level;
        }
        if let Some(format) = var("NUISANCE_LOG_FORMAT") {
            config.format = format.parse().unwrap_or_default();
        }

        if let Some(v) = var("NUISANCE_LOG_TIME") {
            config.display.time = parse_flag(&v);
        }
        if let Some(v) = var("NUISANCE_LOG_SOURCE") {
            config.display.source = parse_flag(&v);
        }
        if let Some(v) = var("NUISANCE_LOG_COLORS") {
            config.display.colors = Some(parse_flag(&v));
        }

        config.service = var("NUISANCE_SERVICE");
        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: Some(true),
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: Some(false),
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration (trace level, no colors or timestamps)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: Some(false),
                time: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}
