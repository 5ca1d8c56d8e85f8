//! # Tunedex Store
//!
//! Key-value store capability for Tunedex.
//!
//! This crate defines the lowest-level storage abstraction the catalog is
//! built on. A store is a **hash-of-hashes**: every key maps to a flat
//! string field map, and the store is consumed purely at the capability
//! level (existence check, hash read/write, cursor scan, flush). The wire
//! protocol of any remote store behind this trait is deliberately out of
//! scope.
//!
//! ## Design Principles
//!
//! - Stores hold opaque field maps - they do not understand records
//! - Conditional write (`set_hash_if_absent`) is the only reservation
//!   primitive; callers never get a safe exists-then-write sequence
//! - Must be `Send + Sync` so one handle can serve all operations
//!
//! ## Available Stores
//!
//! - [`MemoryStore`] - thread-safe in-memory store for tests, tooling,
//!   and embedded use
//!
//! ## Example
//!
//! ```rust
//! use tunedex_store::{FieldMap, KvStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let mut fields = FieldMap::new();
//! fields.insert("title".to_string(), "Blue in Green".to_string());
//! store.set_hash("song:00001", &fields).unwrap();
//! assert!(store.exists("song:00001").unwrap());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod memory;
mod pattern;
mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use pattern::glob_match;
pub use store::{FieldMap, KvStore, ScanPage};
