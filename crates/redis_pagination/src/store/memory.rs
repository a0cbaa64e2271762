//! In-memory list store implementation.
//!
//! Mirrors the Redis list semantics the paginator depends on: a missing key
//! is an empty list, an emptied list disappears, and range reads resolve
//! indexes exactly like `LRANGE`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use redis_pagination_core::pagination::resolve_range;
use redis_pagination_core::store::{ListStore, Result};

/// In-memory list store.
///
/// Thread-safe store using `Arc<RwLock<HashMap>>` for concurrent access.
/// Clones share the same lists.
#[derive(Debug, Clone, Default)]
pub struct MemoryListStore {
    lists: Arc<RwLock<HashMap<String, Vec<Vec<u8>>>>>,
}

impl MemoryListStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends values to the tail of the list at `key`, like `RPUSH`.
    ///
    /// Returns the new length of the list.
    pub async fn push_back<I, V>(&self, key: &str, values: I) -> u64
    where
        I: IntoIterator<Item = V>,
        V: Into<Vec<u8>>,
    {
        let mut lists = self.lists.write().await;
        let list = lists.entry(key.to_string()).or_default();
        list.extend(values.into_iter().map(Into::into));
        let len = list.len() as u64;

        // An RPUSH with no values never creates the key.
        if len == 0 {
            lists.remove(key);
        }

        len
    }

    /// Replaces the whole list at `key`. An empty replacement removes the key.
    pub async fn replace<I, V>(&self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Vec<u8>>,
    {
        let list: Vec<Vec<u8>> = values.into_iter().map(Into::into).collect();
        let mut lists = self.lists.write().await;
        if list.is_empty() {
            lists.remove(key);
        } else {
            lists.insert(key.to_string(), list);
        }
    }

    /// Removes the list at `key`.
    pub async fn clear(&self, key: &str) {
        self.lists.write().await.remove(key);
    }
}

fn slice(list: Option<&[Vec<u8>]>, start: i64, stop: i64) -> Vec<Vec<u8>> {
    let Some(list) = list else {
        return Vec::new();
    };
    match resolve_range(list.len(), start, stop) {
        Some(range) => list[range].to_vec(),
        None => Vec::new(),
    }
}

#[async_trait]
impl ListStore for MemoryListStore {
    async fn len(&self, key: &str) -> Result<u64> {
        let lists = self.lists.read().await;
        Ok(lists.get(key).map_or(0, |list| list.len() as u64))
    }

    async fn range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>> {
        let lists = self.lists.read().await;
        Ok(slice(lists.get(key).map(Vec::as_slice), start, stop))
    }

    async fn len_and_range(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> Result<(u64, Vec<Vec<u8>>)> {
        // One read guard covers both reads, so writers cannot interleave.
        let lists = self.lists.read().await;
        let list = lists.get(key).map(Vec::as_slice);
        let len = list.map_or(0, |list| list.len() as u64);
        Ok((len, slice(list, start, stop)))
    }
}
