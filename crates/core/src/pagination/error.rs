use thiserror::Error;

/// Errors that can occur while computing or decoding a page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid page size: {0} (must be greater than zero)")]
    InvalidPageSize(i64),
    #[error("Invalid page size: {0:?} is not an integer")]
    UnparsablePageSize(String),
    #[error("Page offset overflow: page {page} with page size {page_size}")]
    OffsetOverflow { page: u64, page_size: u64 },
    #[error("Invalid UTF-8 in list item at index {index}: {reason}")]
    InvalidUtf8 { index: usize, reason: String },
}

/// Result type for pagination operations.
pub type Result<T> = std::result::Result<T, PaginationError>;
