//! # Nuisance Log
//!
//! `tracing-subscriber` setup for services embedding the nuisance reporting
//! engine. The engine itself only emits `tracing` events; this crate decides
//! where they go.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> Result<(), nuisance_log::LogError> {
//!     let _guard = nuisance_log::init(nuisance_log::Config::from_env())?;
//!
//!     tracing::info!(port = 8080, "server starting");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, Writer};
pub use error::LogError;

/// Install the global subscriber described by `config`.
///
/// Keep the returned guard alive for as long as the root span should stay
/// entered.
pub fn init(config: Config) -> Result<LoggerGuard, LogError> {
    LoggerBuilder::from_config(config).build()
}

/// Install the global subscriber configured from the environment.
///
/// See [`Config::from_env`] for the variables read.
pub fn init_from_env() -> Result<LoggerGuard, LogError> {
    init(Config::from_env())
}
