//! Logger setup errors

/// Error returned while configuring or installing the logger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The filter directives could not be parsed
    #[error("invalid filter {filter:?}: {reason}")]
    Filter {
        /// The rejected directives
        filter: String,
        /// Parser message
        reason: String,
    },

    /// Unknown output format name
    #[error("unknown log format {0:?}, expected pretty, compact or json")]
    Format(String),

    /// A global subscriber was already installed
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}
