//! In-memory table store
//!
//! Holds the fixed set of named row collections the engine queries:
//! - sales (id, product, amount, date)
//! - customers (id, name, email)
//! - products (recognized name, no backing rows)
//!
//! The store is read-only from the engine's perspective: the query path
//! never inserts, updates, or deletes. Instances are constructed explicitly
//! and injected into the service; there is no process-wide singleton.

mod seed;
mod store;

pub use store::{TableName, TableStore};
