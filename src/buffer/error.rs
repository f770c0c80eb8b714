//! Buffer Error Types

#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Buffer capacity must be at least 1 (got {capacity})")]
    InvalidCapacity { capacity: usize },
}

/// Result type for buffer construction
pub type BufferResult<T> = Result<T, BufferError>;
