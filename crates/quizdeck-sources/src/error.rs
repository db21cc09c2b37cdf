//! Source error types.

use thiserror::Error;

/// Errors that can occur while reading a question-set document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file or topic does not exist.
    #[error("question set not found: {0}")]
    NotFound(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// The document could not be read from disk.
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// The document was read but is not JSON.
    #[error("invalid question set body from {location}: {message}")]
    InvalidBody { location: String, message: String },
}

impl SourceError {
    /// Returns `true` if the resource itself is missing (as opposed to
    /// unreachable or unreadable).
    pub fn is_missing(&self) -> bool {
        match self {
            SourceError::NotFound(_) => true,
            SourceError::Status { status, .. } => *status == 404,
            _ => false,
        }
    }
}
