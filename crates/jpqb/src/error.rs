//! Error types for jpqb

use thiserror::Error;

/// Result type alias for builder operations
pub type QbResult<T> = Result<T, QbError>;

/// Error types for query assembly and parameter binding
#[derive(Debug, Error)]
pub enum QbError {
    /// A composition helper was invoked with invalid input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The execution handle failed to compile the rendered query
    #[error("Compile error: {0}")]
    Compile(String),

    /// The execution handle rejected a parameter binding
    #[error("Bind error: {0}")]
    Bind(String),
}

impl QbError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a compile error from an execution-handle failure
    pub fn compile(message: impl Into<String>) -> Self {
        Self::Compile(message.into())
    }

    /// Create a bind error from an execution-handle failure
    pub fn bind(message: impl Into<String>) -> Self {
        Self::Bind(message.into())
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this error was surfaced by an execution handle
    pub fn is_handle_error(&self) -> bool {
        matches!(self, Self::Compile(_) | Self::Bind(_))
    }
}
