//! Typed errors for the discovery library.
//!
//! Business outcomes (no match, slug taken) are return values, not errors.
//! What remains is malformed input and failures in the candidate store.

use thiserror::Error;

/// Errors that can occur during discovery operations.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Malformed input to a pure operation (e.g. a NaN radius)
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Candidate store failed to produce candidates
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Reading a candidate file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Candidate file is not valid JSON for the requested entity
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {message}")]
    Config { message: String },
}

impl DiscoveryError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
