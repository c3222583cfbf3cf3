//! Error types for `kubeadm-config`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for configuration printing and loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    // === Serialization Errors ===
    /// The value could not be turned into a YAML tree.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The YAML tree holds something the block renderer cannot express.
    #[error("Cannot render value at '{path}': {reason}")]
    UnsupportedValue { path: String, reason: String },

    // === Document Errors ===
    /// The document declares an API version this crate does not understand.
    #[error("Unsupported apiVersion '{found}', expected '{expected}'")]
    UnsupportedVersion {
        found: String,
        expected: &'static str,
    },

    /// The document declares a kind other than MasterConfiguration.
    #[error("Unexpected kind '{found}', expected '{expected}'")]
    UnexpectedKind {
        found: String,
        expected: &'static str,
    },

    /// Configuration file not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // === I/O Errors ===
    /// Reading a document or writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    #[must_use]
    pub fn unsupported(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type using `ConfigError`.
pub type Result<T> = std::result::Result<T, ConfigError>;
