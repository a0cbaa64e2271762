//! Paginator over a single list key.
//!
//! The paginator is the imperative shell around the pure page arithmetic in
//! `redis_pagination_core::pagination`: it reads the list length and the
//! requested slice from a [`ListStore`] and assembles a [`Page`].
//!
//! Nothing is cached between calls. Every operation observes the list as it
//! is at the moment of the query.

use std::sync::Arc;

use redis_pagination_core::pagination::{
    decode_utf8_items, normalize_page, page_bounds, total_pages, Page, PageOptions, PageSize,
};
use redis_pagination_core::store::{ListStore, StoreError};

use crate::{PaginationConfig, Result};

/// Computes page counts and page slices for one list in a [`ListStore`].
///
/// The only state is the list key and the default page size; both are fixed
/// at construction, so a paginator can be shared freely between tasks.
#[derive(Clone)]
pub struct ListPaginator {
    key: String,
    store: Arc<dyn ListStore>,
    default_page_size: PageSize,
}

impl ListPaginator {
    /// Creates a paginator for the list at `key`.
    ///
    /// The key is not validated. A key that does not exist behaves as an
    /// empty list.
    pub fn new(
        key: impl Into<String>,
        store: Arc<dyn ListStore>,
        config: &PaginationConfig,
    ) -> Self {
        Self {
            key: key.into(),
            store,
            default_page_size: config.default_page_size,
        }
    }

    /// Returns the list key this paginator reads.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the page size used when a call does not override it.
    pub fn default_page_size(&self) -> PageSize {
        self.default_page_size
    }

    /// Returns the number of pages the list spans at `page_size`.
    ///
    /// Falls back to the configured default page size when `page_size` is
    /// `None`. Returns 0 for an empty or missing list.
    pub async fn total_pages(&self, page_size: Option<PageSize>) -> Result<u64> {
        let page_size = page_size.unwrap_or(self.default_page_size);
        let total_items = self.total_items().await?;
        Ok(total_pages(total_items, page_size))
    }

    /// Returns the current length of the list.
    pub async fn total_items(&self) -> Result<u64> {
        let len = self
            .store
            .len(&self.key)
            .await
            .inspect_err(|e| self.log_store_error(e))?;
        Ok(len)
    }

    /// Fetches one page of raw list items.
    ///
    /// Page numbers below 1 are clamped to 1. A page past the end of the
    /// list comes back with no items and the real totals.
    ///
    /// The length and the slice are read through
    /// [`ListStore::len_and_range`], so `total_items`, `total_pages` and
    /// `items` are as consistent as the backend makes that call.
    pub async fn page(&self, page: i64, options: PageOptions) -> Result<Page<Vec<u8>>> {
        let current_page = normalize_page(page);
        let page_size = options.page_size.unwrap_or(self.default_page_size);
        let bounds = page_bounds(current_page, page_size)?;

        tracing::debug!(
            key = %self.key,
            requested_page = page,
            current_page,
            page_size = page_size.get(),
            start = bounds.start,
            stop = bounds.stop,
            "Fetching list page"
        );

        // Bounds are guaranteed to fit an i64 by `page_bounds`.
        let (total_items, items) = self
            .store
            .len_and_range(&self.key, bounds.start as i64, bounds.stop as i64)
            .await
            .inspect_err(|e| self.log_store_error(e))?;

        Ok(Page {
            current_page,
            total_pages: total_pages(total_items, page_size),
            total_items,
            items,
        })
    }

    /// Fetches one page and decodes every item as UTF-8.
    pub async fn page_strings(&self, page: i64, options: PageOptions) -> Result<Page<String>> {
        let page = self.page(page, options).await?;
        Ok(decode_utf8_items(page)?)
    }

    fn log_store_error(&self, error: &StoreError) {
        tracing::warn!(key = %self.key, error = %error, "List store query failed");
    }
}

impl std::fmt::Debug for ListPaginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListPaginator")
            .field("key", &self.key)
            .field("default_page_size", &self.default_page_size)
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "memory"))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use redis_pagination_core::pagination::PaginationError;
    use redis_pagination_core::store::Result as StoreResult;

    use super::*;
    use crate::store::MemoryListStore;
    use crate::PaginatorError;

    fn config(page_size: i64) -> PaginationConfig {
        PaginationConfig {
            default_page_size: PageSize::new(page_size).unwrap(),
            redis_url: "redis://localhost:6379".to_string(),
        }
    }

    async fn letters_paginator(page_size: i64) -> ListPaginator {
        let store = MemoryListStore::new();
        store.push_back("letters", ["a", "b", "c", "d", "e"]).await;
        ListPaginator::new("letters", Arc::new(store), &config(page_size))
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Store that always fails, for checking error propagation.
    struct FailingStore;

    #[async_trait]
    impl ListStore for FailingStore {
        async fn len(&self, _key: &str) -> StoreResult<u64> {
            Err(StoreError::ConnectionFailed("connection refused".to_string()))
        }

        async fn range(&self, _key: &str, _start: i64, _stop: i64) -> StoreResult<Vec<Vec<u8>>> {
            Err(StoreError::ConnectionFailed("connection refused".to_string()))
        }
    }

    /// Store that counts queries and relies on the default `len_and_range`.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryListStore,
        len_calls: AtomicUsize,
        range_calls: AtomicUsize,
    }

    #[async_trait]
    impl ListStore for CountingStore {
        async fn len(&self, key: &str) -> StoreResult<u64> {
            self.len_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.len(key).await
        }

        async fn range(&self, key: &str, start: i64, stop: i64) -> StoreResult<Vec<Vec<u8>>> {
            self.range_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.range(key, start, stop).await
        }
    }

    #[tokio::test]
    async fn test_first_page() {
        let paginator = letters_paginator(2).await;

        let page = paginator.page_strings(1, PageOptions::default()).await.unwrap();

        assert_eq!(
            page,
            Page {
                current_page: 1,
                total_pages: 3,
                total_items: 5,
                items: strings(&["a", "b"]),
            }
        );
    }

    #[tokio::test]
    async fn test_last_partial_page() {
        let paginator = letters_paginator(2).await;

        let page = paginator.page_strings(3, PageOptions::default()).await.unwrap();

        assert_eq!(page.current_page, 3);
        assert_eq!(page.items, strings(&["e"]));
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let paginator = letters_paginator(2).await;

        let page = paginator.page_strings(4, PageOptions::default()).await.unwrap();

        assert_eq!(page.current_page, 4);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 5);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_page_below_one_matches_first_page() {
        let paginator = letters_paginator(2).await;
        let first = paginator.page(1, PageOptions::default()).await.unwrap();

        for requested in [0, -1, -100, i64::MIN] {
            let page = paginator.page(requested, PageOptions::default()).await.unwrap();
            assert_eq!(page, first, "requested page {requested}");
        }
    }

    #[tokio::test]
    async fn test_page_size_override() {
        let paginator = letters_paginator(2).await;
        let options = PageOptions::with_page_size(PageSize::new(3).unwrap());

        let page = paginator.page_strings(2, options).await.unwrap();

        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items, strings(&["d", "e"]));
    }

    #[tokio::test]
    async fn test_items_match_store_range() {
        let store = MemoryListStore::new();
        let values: Vec<String> = (0..23).map(|i| format!("item-{i}")).collect();
        store.push_back("numbers", values.clone()).await;
        let paginator = ListPaginator::new("numbers", Arc::new(store), &config(4));

        for p in 1..=8u64 {
            let page = paginator.page_strings(p as i64, PageOptions::default()).await.unwrap();
            let start = ((p - 1) * 4) as usize;
            let stop = (p * 4) as usize;
            let expected: Vec<String> = values
                .iter()
                .skip(start)
                .take(stop - start)
                .cloned()
                .collect();
            assert_eq!(page.items, expected, "page {p}");
            assert_eq!(page.total_pages, 6);
        }
    }

    #[tokio::test]
    async fn test_exact_fit_and_one_over() {
        let store = MemoryListStore::new();
        store.push_back("exact", ["1", "2", "3"]).await;
        store.push_back("over", ["1", "2", "3", "4"]).await;
        let store: Arc<dyn ListStore> = Arc::new(store);

        let exact = ListPaginator::new("exact", store.clone(), &config(3));
        assert_eq!(exact.total_pages(None).await.unwrap(), 1);

        let over = ListPaginator::new("over", store, &config(3));
        assert_eq!(over.total_pages(None).await.unwrap(), 2);
        let page = over.page_strings(2, PageOptions::default()).await.unwrap();
        assert_eq!(page.items, strings(&["4"]));
    }

    #[tokio::test]
    async fn test_empty_list() {
        let paginator =
            ListPaginator::new("missing", Arc::new(MemoryListStore::new()), &config(10));

        assert_eq!(paginator.total_items().await.unwrap(), 0);
        assert_eq!(paginator.total_pages(None).await.unwrap(), 0);
        assert_eq!(
            paginator
                .total_pages(Some(PageSize::new(1).unwrap()))
                .await
                .unwrap(),
            0
        );

        let page = paginator.page(1, PageOptions::default()).await.unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_total_pages_uses_default_or_override() {
        let paginator = letters_paginator(2).await;

        assert_eq!(paginator.total_pages(None).await.unwrap(), 3);
        assert_eq!(
            paginator
                .total_pages(Some(PageSize::new(5).unwrap()))
                .await
                .unwrap(),
            1
        );
        assert_eq!(paginator.total_items().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_repeated_page_is_idempotent() {
        let paginator = letters_paginator(2).await;

        let first = paginator.page(2, PageOptions::default()).await.unwrap();
        let second = paginator.page(2, PageOptions::default()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_reads_live_list() {
        let store = MemoryListStore::new();
        store.push_back("live", ["a"]).await;
        let paginator = ListPaginator::new("live", Arc::new(store.clone()), &config(2));

        assert_eq!(paginator.total_pages(None).await.unwrap(), 1);

        store.push_back("live", ["b", "c"]).await;

        assert_eq!(paginator.total_items().await.unwrap(), 3);
        assert_eq!(paginator.total_pages(None).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let paginator = ListPaginator::new("any", Arc::new(FailingStore), &config(2));
        let expected = PaginatorError::Store(StoreError::ConnectionFailed(
            "connection refused".to_string(),
        ));

        assert_eq!(paginator.total_items().await.unwrap_err(), expected);
        assert_eq!(paginator.total_pages(None).await.unwrap_err(), expected);
        assert_eq!(
            paginator.page(1, PageOptions::default()).await.unwrap_err(),
            expected
        );
    }

    #[tokio::test]
    async fn test_offset_overflow_is_reported() {
        let paginator = letters_paginator(2).await;
        let options = PageOptions::with_page_size(PageSize::new(i64::MAX).unwrap());

        let err = paginator.page(3, options).await.unwrap_err();

        assert!(matches!(
            err,
            PaginatorError::Pagination(PaginationError::OffsetOverflow { page: 3, .. })
        ));
    }

    #[tokio::test]
    async fn test_default_len_and_range_issues_two_reads() {
        let store = Arc::new(CountingStore::default());
        store.inner.push_back("letters", ["a", "b", "c"]).await;
        let paginator = ListPaginator::new("letters", store.clone(), &config(2));

        paginator.page(1, PageOptions::default()).await.unwrap();

        assert_eq!(store.len_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.range_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_utf8_item() {
        let store = MemoryListStore::new();
        store.push_back("bytes", [vec![0xff_u8]]).await;
        let paginator = ListPaginator::new("bytes", Arc::new(store), &config(2));

        let raw = paginator.page(1, PageOptions::default()).await.unwrap();
        assert_eq!(raw.items, vec![vec![0xff_u8]]);

        let err = paginator
            .page_strings(1, PageOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PaginatorError::Pagination(PaginationError::InvalidUtf8 { index: 0, .. })
        ));
    }

    #[tokio::test]
    async fn test_key_and_default_page_size() {
        let paginator = letters_paginator(7).await;

        assert_eq!(paginator.key(), "letters");
        assert_eq!(paginator.default_page_size().get(), 7);
        assert!(format!("{paginator:?}").contains("letters"));
    }
}
