//! Console error types

use hr_client::ClientError;
use thiserror::Error;

/// Console error type
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Client-side required-field or length check failed
    #[error("{0}")]
    Validation(String),

    /// The backend call failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ConsoleError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ConsoleError::Validation(msg.into())
    }
}

/// Result type for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;
