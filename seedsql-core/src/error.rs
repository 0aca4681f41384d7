//! Error types for seedsql

use std::fmt;
use thiserror::Error;

/// Result type alias for seedsql operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for seedsql operations
///
/// Malformed groups are deliberately absent: a group whose fields cannot be
/// read still yields a row, with the unreadable columns rendered as `NULL`.
#[derive(Error, Debug)]
pub enum Error {
    /// The start marker does not occur anywhere in the source text
    #[error("start marker {marker:?} not found in source text")]
    MarkerNotFound { marker: String },

    /// A configured pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Table schema errors
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a marker-not-found error
    pub fn marker_not_found(marker: impl Into<String>) -> Self {
        Self::MarkerNotFound {
            marker: marker.into(),
        }
    }

    /// Create a schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::MarkerNotFound { .. } => ErrorCategory::NotFound,
            Error::Pattern(_) => ErrorCategory::Configuration,
            Error::Schema(_) => ErrorCategory::Schema,
            Error::Configuration(_) => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The expected input was not present
    NotFound,
    /// Schema-related errors
    Schema,
    /// Configuration errors
    Configuration,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::NotFound => "NotFound",
            ErrorCategory::Schema => "Schema",
            ErrorCategory::Configuration => "Configuration",
        };
        write!(f, "{}", name)
    }
}
