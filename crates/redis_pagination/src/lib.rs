//! Pagination over lists stored in Redis.
//!
//! A [`ListPaginator`] wraps one list key and answers three questions about
//! it: how many items it holds, how many pages those items span, and which
//! items fall on a given page. The list itself is read through a
//! [`ListStore`] backend chosen at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): in-process list store, handy for tests
//! - `redis`: Redis list store using the redis crate
#![cfg_attr(
    feature = "memory",
    doc = r#"
# Example

```
use std::sync::Arc;

use redis_pagination::{ListPaginator, MemoryListStore, PageOptions, PageSize, PaginationConfig};

# #[tokio::main(flavor = "current_thread")]
# async fn main() -> Result<(), Box<dyn std::error::Error>> {
let store = MemoryListStore::new();
store.push_back("letters", ["a", "b", "c", "d", "e"]).await;

let config = PaginationConfig::default().with_page_size(PageSize::new(2)?);
let paginator = ListPaginator::new("letters", Arc::new(store), &config);

let page = paginator.page_strings(3, PageOptions::default()).await?;
assert_eq!(page.total_pages, 3);
assert_eq!(page.items, vec!["e".to_string()]);
# Ok(())
# }
```
"#
)]

mod config;
mod error;
mod paginator;
pub mod store;

pub use config::PaginationConfig;
pub use error::{PaginatorError, Result};
pub use paginator::ListPaginator;

pub use redis_pagination_core::pagination::{
    Page, PageBounds, PageOptions, PageSize, PaginationError,
};
pub use redis_pagination_core::store::{ListStore, StoreError};

#[cfg(feature = "memory")]
pub use store::MemoryListStore;

#[cfg(feature = "redis")]
pub use store::RedisListStore;
