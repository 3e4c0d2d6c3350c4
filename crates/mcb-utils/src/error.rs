//! Error type for the shared utilities crate.
//!
//! `mcb-utils` deliberately has no dependency on `mcb-domain` (it sits below
//! the domain layer in the dependency graph — see the workspace README),
//! so it carries its own small `thiserror` enum rather than
//! `mcb_domain::error::Error`.

use thiserror::Error;

/// Result alias for `mcb-utils` operations.
pub type Result<T> = std::result::Result<T, UtilsError>;

/// Errors raised by the shared utility helpers.
#[derive(Error, Debug)]
pub enum UtilsError {
    /// Filesystem I/O failure.
    #[error("I/O error: {message}")]
    Io {
        /// Description of what was being attempted.
        message: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Cryptographic operation failed (bad key length, tampered ciphertext).
    #[error("crypto error: {0}")]
    Crypto(String),

    /// Input failed validation before an operation could proceed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl UtilsError {
    /// Build an [`UtilsError::Io`] from a message and source error.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Build an [`UtilsError::Crypto`] error.
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Build an [`UtilsError::InvalidInput`] error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
