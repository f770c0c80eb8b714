//! Controller Error Types
//!
//! All variants are local, recoverable conditions surfaced to the caller;
//! none are fatal to the process.

use crate::buffer::BufferError;

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("A session is already running")]
    AlreadyRunning,

    #[error("No session is running")]
    NotRunning,

    #[error("Unknown priority: {name}")]
    UnknownPriority { name: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl From<BufferError> for ControlError {
    fn from(err: BufferError) -> Self {
        ControlError::InvalidConfiguration {
            message: err.to_string(),
        }
    }
}

/// Result type for controller operations
pub type ControlResult<T> = Result<T, ControlError>;
