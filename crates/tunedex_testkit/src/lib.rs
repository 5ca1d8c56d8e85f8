//! # Tunedex Testkit
//!
//! Test utilities for Tunedex.
//!
//! This crate provides:
//! - Catalog fixtures over an in-memory store
//! - Property-based test generators using proptest
//! - Failure-injecting store wrappers for error-path tests
//!
//! ## Usage
//!
//! ```rust
//! use tunedex_testkit::fixtures::TestCatalog;
//!
//! let fixture = TestCatalog::new();
//! fixture.ingest_samples();
//! assert!(!fixture.catalog.search("Davis").unwrap().is_empty());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod flaky;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::{draft_song, sample_songs, TestCatalog};
    pub use crate::flaky::{FailingStore, FlakyStore};
    pub use crate::generators::{complete_song, song_batch};
}
