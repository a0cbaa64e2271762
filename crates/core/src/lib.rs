//! Functional core for paginating lists held in an external store.
//!
//! This crate holds the page arithmetic, the value types shared by every
//! backend, and the [`store::ListStore`] trait the shell crate implements.
//! Nothing in here performs I/O.

pub mod pagination;
pub mod store;
