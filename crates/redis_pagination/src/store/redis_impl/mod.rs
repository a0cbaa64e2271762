//! Redis list store backend implementation.
//!
//! Reads lists with `LLEN` and `LRANGE` over a pooled connection manager.

mod error;
mod store;

pub use store::RedisListStore;
