//! Redis list store implementation.
//!
//! `len_and_range` sends `LLEN` and `LRANGE` inside one `MULTI`/`EXEC`
//! pipeline. Redis runs the transaction without interleaving other clients,
//! so the length and the slice always describe the same list state, and the
//! whole page costs a single round trip.

use async_trait::async_trait;
use redis::AsyncCommands;

use redis_pagination_core::store::{ListStore, Result, StoreError};

use super::error::map_redis_error;
use crate::PaginationConfig;

/// Redis list store using connection manager for pooling.
///
/// Cloning is cheap; clones share the underlying multiplexed connection.
#[derive(Clone)]
pub struct RedisListStore {
    conn: redis::aio::ConnectionManager,
}

impl RedisListStore {
    /// Creates a new Redis connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        tracing::debug!("Connected to Redis list store");
        Ok(Self { conn })
    }

    /// Connects to the Redis server named by `config.redis_url`.
    pub async fn from_config(config: &PaginationConfig) -> Result<Self> {
        Self::new(&config.redis_url).await
    }

    /// Wraps a connection manager owned by the caller.
    pub fn from_connection(conn: redis::aio::ConnectionManager) -> Self {
        Self { conn }
    }
}

fn to_isize(index: i64) -> Result<isize> {
    isize::try_from(index)
        .map_err(|_| StoreError::OperationFailed(format!("list index out of range: {index}")))
}

#[async_trait]
impl ListStore for RedisListStore {
    async fn len(&self, key: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        let len: u64 = conn.llen(key).await.map_err(map_redis_error)?;
        Ok(len)
    }

    async fn range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let items: Vec<Vec<u8>> = conn
            .lrange(key, to_isize(start)?, to_isize(stop)?)
            .await
            .map_err(map_redis_error)?;
        Ok(items)
    }

    async fn len_and_range(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> Result<(u64, Vec<Vec<u8>>)> {
        let mut pipe = redis::pipe();
        pipe.atomic()
            .llen(key)
            .lrange(key, to_isize(start)?, to_isize(stop)?);

        let mut conn = self.conn.clone();
        let (len, items): (u64, Vec<Vec<u8>>) = pipe
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok((len, items))
    }
}
