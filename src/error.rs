//! Error types for sifcache
//!
//! All modules use `CacheResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Coarse classification of a [`CacheError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or malformed hash or image name
    InvalidArgument,
    /// Filesystem or hashing failure
    Io,
    /// Unreadable or malformed configuration
    Config,
    /// Anything else (output serialization, background tasks)
    Other,
}

/// All errors that can occur in sifcache
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // IO errors
    #[error("IO error: {context}: {}", path.display())]
    Io {
        context: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(String),
}

impl CacheError {
    /// Create an IO error with context and the path involved
    pub fn io(context: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: path.into(),
            source,
        }
    }

    /// Create an invalid argument error
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Io { .. } => ErrorKind::Io,
            Self::ConfigInvalid { .. } | Self::TomlSerialize(_) => ErrorKind::Config,
            Self::Json(_) | Self::Task(_) => ErrorKind::Other,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied => {
                Some("Check ownership of the cache directory or set SINGULARITY_CACHEDIR")
            }
            Self::ConfigInvalid { .. } => Some("Run: sifcache config show"),
            _ => None,
        }
    }
}
