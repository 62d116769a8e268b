//! Error types for the logging system.
//!
//! The store's write, read, and clear paths are infallible by contract;
//! errors only arise from the optional export surface.

use thiserror::Error;

/// Errors that can occur in the logging system.
#[derive(Debug, Error)]
pub enum LogError {
    /// Serialization of a log snapshot failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for log operations.
pub type Result<T> = std::result::Result<T, LogError>;
