//! List store backend implementations.
//!
//! This module provides concrete implementations of the
//! `redis_pagination_core::store::ListStore` trait. The implementations are
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-memory lists guarded by a tokio `RwLock`
//! - `redis`: Redis lists using the redis crate
//!
//! Both backends may be compiled in at the same time; the caller picks one
//! when constructing a [`crate::ListPaginator`].

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(feature = "memory")]
pub use memory::MemoryListStore;

#[cfg(feature = "redis")]
pub use redis_impl::RedisListStore;
