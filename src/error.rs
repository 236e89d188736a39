//! Error types for dashboard initialization.
//!
//! Only configuration problems are errors. Missing statistics or components
//! the runtime does not know about are rendered as "unknown" instead.

use thiserror::Error;

/// Shorthand result type for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors that prevent the dashboard from becoming available.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A required configuration value is blank or unset.
    #[error("{0} must be set")]
    MissingValue(&'static str),

    /// The host runtime has no model with this name.
    #[error("Can not locate a model named: {0}")]
    ModelNotFound(String),

    /// The component name filter is not a valid regular expression.
    #[error("Invalid component name pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration sources could not be read or deserialized.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
