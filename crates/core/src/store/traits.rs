use async_trait::async_trait;

use super::Result;

/// Read access to named, ordered lists held by an external store.
///
/// Indexes follow Redis `LRANGE` conventions: zero-based, inclusive on both
/// ends, negative values counting from the tail. Out-of-range indexes yield
/// a truncated or empty result, never an error. A missing key behaves as an
/// empty list.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Returns the number of elements in the list at `key`.
    async fn len(&self, key: &str) -> Result<u64>;

    /// Returns the elements between `start` and `stop`, inclusive.
    async fn range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>>;

    /// Returns the list length together with the elements between `start`
    /// and `stop`.
    ///
    /// The default issues [`ListStore::len`] and then [`ListStore::range`]
    /// as two separate reads, so a concurrent writer can change the list in
    /// between. Backends that can observe both at once should override it.
    async fn len_and_range(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> Result<(u64, Vec<Vec<u8>>)> {
        let len = self.len(key).await?;
        let items = self.range(key, start, stop).await?;
        Ok((len, items))
    }
}
