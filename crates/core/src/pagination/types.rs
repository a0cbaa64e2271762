use serde::{Deserialize, Serialize};

use super::PaginationError;

/// Number of list elements that make up one page. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct PageSize(u64);

impl PageSize {
    /// Page size used when neither the caller nor the configuration picks one.
    pub const DEFAULT: PageSize = PageSize(25);

    /// Creates a page size, rejecting zero and negative values.
    pub fn new(size: i64) -> Result<Self, PaginationError> {
        if size <= 0 {
            return Err(PaginationError::InvalidPageSize(size));
        }
        Ok(Self(size as u64))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for PageSize {
    type Error = PaginationError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for u64 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-call options for fetching a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Overrides the configured default page size for this call.
    pub page_size: Option<PageSize>,
}

impl PageOptions {
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            page_size: Some(page_size),
        }
    }
}

/// Inclusive, zero-based offsets of a page within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub start: u64,
    pub stop: u64,
}

/// One page of list items together with the list totals observed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Transforms every item, keeping the page metadata.
    pub fn map_items<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Returns true if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if a later page holds items.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns true if this is not the first page.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}
