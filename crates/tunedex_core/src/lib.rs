//! # Tunedex Core
//!
//! The catalog store core: how records are named, represented, and
//! located without ever loading the full keyspace into memory.
//!
//! Three pieces carry the design weight:
//!
//! - [`IdAllocator`] - collision-avoiding identifier allocation, built
//!   on the store's atomic conditional write rather than a racy
//!   exists-then-write sequence.
//! - [`SearchEngine`] - cursor-driven free-text search that scans the
//!   keyspace incrementally and accumulates matches.
//! - [`Catalog`] - the façade combining allocation, the record codec,
//!   and search over one long-lived store handle.
//!
//! Plus the supporting cast: key naming ([`RecordId`], [`record_key`]),
//! the flat-file ingestion reader ([`parse_songs`]), configuration, and
//! the error taxonomy.
//!
//! ## Example
//!
//! ```
//! use tunedex_core::{parse_songs, Catalog};
//! use std::io::Cursor;
//!
//! let source = "Song A, Artist X, 2020, Album1, 200\n";
//! let report = parse_songs(Cursor::new(source)).unwrap();
//!
//! let catalog = Catalog::in_memory();
//! catalog.ingest(&report.songs).unwrap();
//! assert_eq!(catalog.search("Artist X").unwrap().len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod alloc;
mod catalog;
mod config;
mod error;
mod ingest;
mod key;
mod search;

pub use self::alloc::IdAllocator;
pub use catalog::{Catalog, IngestFailure, IngestReport, StoredSong};
pub use config::{Config, Deadline, RetryPolicy};
pub use error::{CoreError, CoreResult};
pub use ingest::{parse_line, parse_songs, LineError, ParseReport, RejectedLine, SONG_LINE_FIELDS};
pub use key::{
    record_key, scan_pattern, RecordId, MAX_RECORD_ID, RECORD_ID_DIGITS, SONG_NAMESPACE,
};
pub use search::SearchEngine;

/// Crate version, surfaced for tooling.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
