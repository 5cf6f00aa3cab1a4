//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Issues with reference lists and CLI configuration
//! - IoError: File system and stdin failures
//!
//! Grouping itself never fails; these errors only come from the layers
//! that gather its inputs.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reference list file could not be parsed
    #[error("failed to parse reference list {path}: {message}")]
    ReferenceParse { path: PathBuf, message: String },

    /// Reference list file has no entries
    #[error("reference list {path} contains no versions")]
    EmptyReference { path: PathBuf },

    /// Nothing to group
    #[error("no versions given: pass them as arguments or on stdin")]
    NoVersions,

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read a file
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read standard input
    #[error("failed to read stdin: {source}")]
    Stdin {
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Creates a new ReferenceParse error
    pub fn reference_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::ReferenceParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new EmptyReference error
    pub fn empty_reference(path: impl Into<PathBuf>) -> Self {
        ConfigError::EmptyReference { path: path.into() }
    }

    /// Creates a new ConflictingOptions error
    pub fn conflicting_options(message: impl Into<String>) -> Self {
        ConfigError::ConflictingOptions {
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        IoError::NotFound { path: path.into() }
    }

    /// Creates a new Read error, mapping `NotFound` to the dedicated variant
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return IoError::not_found(path);
        }
        IoError::Read { path, source }
    }

    /// Creates a new Stdin error
    pub fn stdin(source: std::io::Error) -> Self {
        IoError::Stdin { source }
    }
}
