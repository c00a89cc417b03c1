//! Error types for facl-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for facl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in facl.
///
/// Permission evaluation itself never fails; these cover the I/O and input
/// handling around it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The ACL source text could not be opened or read.
    #[error("ACL source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        /// Path of the ACL source
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O error on a file other than the ACL source
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Caller-supplied input was rejected
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the input
        message: String,
    },

    /// A value could not be encoded for output
    #[error("Serialization error: {message}")]
    Serialization {
        /// What failed to encode
        message: String,
    },
}

impl Error {
    /// Creates a source-unavailable error for the given ACL path.
    pub fn source_unavailable(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::SourceUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an I/O error annotated with the path being accessed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a new serialization error.
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Error::Serialization {
            message: message.into(),
        }
    }

    /// Returns `true` if this error means no ACL could be obtained.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Error::SourceUnavailable { .. })
    }
}
