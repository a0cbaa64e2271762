//! Redis error mapping to StoreError.

use redis_pagination_core::store::StoreError;

/// Maps Redis errors to StoreError, keeping the Redis message.
pub fn map_redis_error(err: redis::RedisError) -> StoreError {
    if err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped() {
        StoreError::ConnectionFailed(err.to_string())
    } else {
        StoreError::OperationFailed(err.to_string())
    }
}
