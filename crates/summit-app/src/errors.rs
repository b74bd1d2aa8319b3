//! Application error types
//!
//! Library code returns [`AppError`]; binaries wrap it in `anyhow`.

use std::path::PathBuf;

use summit_core::{StateError, StoreError};

/// Errors surfaced by the application layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration is malformed or fails validation
    #[error("Config error: {message}")]
    Config {
        /// Error message describing the configuration problem
        message: String,
    },

    /// A file could not be read
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A snapshot or script did not match its schema
    #[error(transparent)]
    Shape(#[from] StateError),

    /// The store rejected a write
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
