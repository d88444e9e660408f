//! Error types for binsniff.
//!
//! Format sniffing itself never fails towards the caller; these errors cover
//! the surrounding surface: opening files, loading configuration, and
//! building search patterns from signatures.

use thiserror::Error;

/// Main error type for binsniff operations.
#[derive(Debug, Error)]
pub enum SniffError {
    /// Bounded file access errors
    #[error("I/O error: {0}")]
    Io(#[from] crate::io::error::IoError),

    /// Errors raised by the byte source while saving or restoring its cursor
    #[error("Byte source error: {0}")]
    Source(#[from] std::io::Error),

    /// Signature strings that do not describe a usable byte pattern
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Configuration values outside their accepted range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for binsniff operations
pub type Result<T> = std::result::Result<T, SniffError>;

/// Convert binsniff errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<SniffError> for pyo3::PyErr {
    fn from(err: SniffError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyIOError, PyValueError};

        match err {
            SniffError::Io(e) => PyIOError::new_err(e.to_string()),
            SniffError::Source(e) => PyIOError::new_err(e.to_string()),
            SniffError::InvalidPattern(msg) | SniffError::InvalidConfig(msg) => {
                PyValueError::new_err(msg)
            }
            _ => PyException::new_err(err.to_string()),
        }
    }
}
