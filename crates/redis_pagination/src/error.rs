use redis_pagination_core::{pagination::PaginationError, store::StoreError};
use thiserror::Error;

/// Errors returned by [`crate::ListPaginator`].
///
/// Store failures pass through untouched; the paginator adds no recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginatorError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

/// Result type for paginator operations.
pub type Result<T> = std::result::Result<T, PaginatorError>;
