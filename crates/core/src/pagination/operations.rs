//! Pure functions for page arithmetic.
//!
//! Everything here is deterministic and free of I/O so the paginator in the
//! shell crate only has to sequence store queries around these results.

use std::ops::Range;

use super::{Page, PageBounds, PageSize, PaginationError, Result};

/// Clamps a requested page number to the first page.
///
/// Page numbers below 1 are treated as a request for page 1.
pub fn normalize_page(page: i64) -> u64 {
    page.max(1) as u64
}

/// Returns the inclusive offsets covered by a one-based page.
///
/// The offsets always fit a signed 64-bit store index; anything larger is
/// reported as [`PaginationError::OffsetOverflow`].
///
/// # Examples
///
/// ```
/// use redis_pagination_core::pagination::{page_bounds, PageBounds, PageSize};
///
/// let size = PageSize::new(2).unwrap();
/// assert_eq!(page_bounds(3, size).unwrap(), PageBounds { start: 4, stop: 5 });
/// ```
pub fn page_bounds(current_page: u64, page_size: PageSize) -> Result<PageBounds> {
    let size = page_size.get();
    let overflow = || PaginationError::OffsetOverflow {
        page: current_page,
        page_size: size,
    };

    let index = current_page.max(1) - 1;
    let start = index.checked_mul(size).ok_or_else(overflow)?;
    let stop = start.checked_add(size - 1).ok_or_else(overflow)?;

    if stop > i64::MAX as u64 {
        return Err(overflow());
    }

    Ok(PageBounds { start, stop })
}

/// Returns the number of pages needed to hold `total_items`.
///
/// Equals `ceil(total_items / page_size)`, so an empty list has zero pages.
pub fn total_pages(total_items: u64, page_size: PageSize) -> u64 {
    total_items.div_ceil(page_size.get())
}

/// Resolves an inclusive `[start, stop]` list range the way Redis `LRANGE` does.
///
/// Negative indexes count back from the tail (`-1` is the last element). A
/// `stop` past the end is clamped to the last element. Returns `None` when
/// the range selects nothing.
///
/// # Examples
///
/// ```
/// use redis_pagination_core::pagination::resolve_range;
///
/// assert_eq!(resolve_range(5, 0, 1), Some(0..2));
/// assert_eq!(resolve_range(5, 4, 10), Some(4..5));
/// assert_eq!(resolve_range(5, -2, -1), Some(3..5));
/// assert_eq!(resolve_range(5, 6, 7), None);
/// ```
pub fn resolve_range(len: usize, start: i64, stop: i64) -> Option<Range<usize>> {
    let len = len as i128;
    let mut start = start as i128;
    let mut stop = stop as i128;

    if start < 0 {
        start = (len + start).max(0);
    }
    if stop < 0 {
        stop += len;
    }

    if start > stop || start >= len {
        return None;
    }

    stop = stop.min(len - 1);

    Some(start as usize..(stop + 1) as usize)
}

/// Decodes store-native byte items into UTF-8 strings.
pub fn decode_utf8_items(page: Page<Vec<u8>>) -> Result<Page<String>> {
    let items = page
        .items
        .into_iter()
        .enumerate()
        .map(|(index, bytes)| {
            String::from_utf8(bytes).map_err(|e| PaginationError::InvalidUtf8 {
                index,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Page {
        current_page: page.current_page,
        total_pages: page.total_pages,
        total_items: page.total_items,
        items,
    })
}
