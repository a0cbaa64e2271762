use thiserror::Error;

/// Errors reported by a list store backend.
///
/// The backend's own message is carried unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("List store connection failed: {0}")]
    ConnectionFailed(String),
    #[error("List store operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for list store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
