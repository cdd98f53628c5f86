//! Error types.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Fatal errors raised while resolving or installing the memory limit.
///
/// Benign outcomes (no cgroup, unbounded cgroup, explicit override) are not
/// errors; see [`Resolution`](crate::system::Resolution).
#[derive(Debug)]
pub enum Error {
    /// Quota file exists but could not be read.
    Unreadable { path: PathBuf, error: io::Error },

    /// Quota file content is neither `max` nor a non-negative byte count.
    Unparsable {
        path: PathBuf,
        value: String,
        error: String,
    },

    /// The process-wide limit was already configured.
    AlreadyConfigured { effective_limit: i64 },

    /// Configuration could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unreadable { path, error } => {
                write!(
                    f,
                    "failed to read cgroup memory limit from '{}': {}",
                    path.display(),
                    error
                )
            }
            Error::Unparsable { path, value, error } => {
                write!(
                    f,
                    "failed to parse cgroup memory limit '{}' in '{}': {}",
                    value,
                    path.display(),
                    error
                )
            }
            Error::AlreadyConfigured { effective_limit } => {
                write!(
                    f,
                    "memory limit already configured (effective limit: {})",
                    effective_limit
                )
            }
            Error::Config(e) => write!(f, "configuration error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Unreadable { error, .. } => Some(error),
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

/// Result type alias for limit resolution.
pub type Result<T> = std::result::Result<T, Error>;
