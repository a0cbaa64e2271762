mod error;
mod operations;
mod types;

pub use error::{PaginationError, Result};
pub use operations::{decode_utf8_items, normalize_page, page_bounds, resolve_range, total_pages};
pub use types::{Page, PageBounds, PageOptions, PageSize};
