//! Error types for package rewriting.
//!
//! Only two conditions are tolerated by the rewriter without an error: a
//! configured directory that does not exist, and a file whose package line
//! does not match the legacy pattern. Everything else surfaces here and
//! aborts the run.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for repackage operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("{message}: {}", path.display())]
    Io {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors tied to a specific configuration file
    #[error("Configuration error in {}: {message}", path.display())]
    ConfigFile { path: PathBuf, message: String },

    /// Failure writing progress output
    #[error("{message}")]
    Report {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Package pattern compilation errors
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error(transparent)]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(message: impl Into<String>, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration validation error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a configuration error tied to a file
    pub fn config_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigFile {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an error for a failed progress write
    pub fn report(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Report {
            message: message.into(),
            source,
        }
    }

    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::ConfigFile { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether the error came from the file system
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
