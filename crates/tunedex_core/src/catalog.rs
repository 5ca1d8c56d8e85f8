//! Catalog façade: ingestion, search, and flush over one store handle.

use crate::alloc::IdAllocator;
use crate::config::{Config, Deadline};
use crate::error::{CoreError, CoreResult};
use crate::key::{record_key, scan_pattern, SONG_NAMESPACE};
use crate::search::SearchEngine;
use std::sync::Arc;
use std::thread;
use tracing::{debug, info, warn};
use tunedex_codec::{encode_song, CodecError, Song, FIELD_ID};
use tunedex_store::{KvStore, MemoryStore};

/// A song that was successfully ingested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSong {
    /// The store key the record lives under.
    pub key: String,
    /// The record as persisted, id assigned.
    pub song: Song,
}

/// One record that failed to ingest.
#[derive(Debug)]
pub struct IngestFailure {
    /// Title of the record, for reporting.
    pub title: String,
    /// Why it failed.
    pub error: CoreError,
}

/// Aggregate outcome of a bulk ingest.
///
/// Record outcomes are independent: one record's failure never aborts
/// the rest of the batch.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Records stored, in batch order.
    pub stored: Vec<StoredSong>,
    /// Records that could not be stored.
    pub failures: Vec<IngestFailure>,
}

impl IngestReport {
    /// Returns true when every record in the batch was stored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The catalog store façade.
///
/// A `Catalog` combines identifier allocation, the record codec, and
/// the scanning search engine over a single long-lived store handle.
/// The handle is `Send + Sync` and shared across operations; every
/// public operation is synchronous and blocking, a sequence of store
/// round-trips with no background work.
///
/// # Example
///
/// ```
/// use tunedex_core::Catalog;
/// use tunedex_codec::Song;
///
/// let catalog = Catalog::in_memory();
/// let song = Song {
///     id: String::new(),
///     title: "Hurricane".to_string(),
///     artist: "Bob Dylan".to_string(),
///     year: 1976,
///     album: "Desire".to_string(),
///     duration_secs: 511,
/// };
/// let report = catalog.ingest(&[song]).unwrap();
/// assert!(report.is_complete());
/// assert_eq!(catalog.search("hurricane").unwrap().len(), 1);
/// ```
pub struct Catalog {
    store: Arc<dyn KvStore>,
    config: Config,
    allocator: IdAllocator,
    engine: SearchEngine,
}

impl Catalog {
    /// Creates a catalog over a store handle with default configuration.
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_config(store, Config::default())
    }

    /// Creates a catalog over a store handle with custom configuration.
    #[must_use]
    pub fn with_config(store: Arc<dyn KvStore>, config: Config) -> Self {
        let allocator = IdAllocator::new(config.max_id_attempts);
        let engine = SearchEngine::new(config.scan_count_hint);
        Self {
            store,
            config,
            allocator,
            engine,
        }
    }

    /// Creates a catalog over a fresh in-memory store.
    ///
    /// Suitable for tests and one-shot tooling.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Ingests a batch of songs: allocate an identifier, encode, and
    /// atomically claim the key, per record.
    ///
    /// Per-record failures (identifier exhaustion, incomplete records)
    /// are isolated into the report; store connectivity failures and a
    /// passed deadline abort the whole operation.
    ///
    /// # Errors
    ///
    /// Returns an error on connectivity failure or an exceeded
    /// deadline.
    pub fn ingest(&self, songs: &[Song]) -> CoreResult<IngestReport> {
        self.connect()?;
        let deadline = Deadline::start(self.config.op_deadline);
        info!(count = songs.len(), "ingesting songs");

        let mut report = IngestReport::default();
        for song in songs {
            deadline.check()?;
            match self.ingest_one(song) {
                Ok(stored) => report.stored.push(stored),
                Err(err @ CoreError::Store(_)) => return Err(err),
                Err(error) => {
                    warn!(title = %song.title, %error, "failed to ingest song");
                    report.failures.push(IngestFailure {
                        title: song.title.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            stored = report.stored.len(),
            failed = report.failures.len(),
            "ingest complete"
        );
        Ok(report)
    }

    fn ingest_one(&self, song: &Song) -> CoreResult<StoredSong> {
        // The id is assigned here; everything else must already be
        // filled or the record could never round-trip out of search.
        let missing: Vec<&str> = song
            .missing_fields()
            .into_iter()
            .filter(|field| *field != FIELD_ID)
            .collect();
        if !missing.is_empty() {
            return Err(CodecError::incomplete_record(&missing).into());
        }

        let fields = encode_song(song);
        let id = self
            .allocator
            .allocate(self.store.as_ref(), SONG_NAMESPACE, &fields)?;
        let key = record_key(SONG_NAMESPACE, &id);

        let mut stored = song.clone();
        stored.id = id.into();
        Ok(StoredSong { key, song: stored })
    }

    /// Free-text search over the song namespace.
    ///
    /// Returns the matching records in sweep order; zero matches is an
    /// empty vec, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error on connectivity failure or an exceeded
    /// deadline.
    pub fn search(&self, query: &str) -> CoreResult<Vec<Song>> {
        self.connect()?;
        let deadline = Deadline::start(self.config.op_deadline);

        let results = self.engine.search(
            self.store.as_ref(),
            &scan_pattern(SONG_NAMESPACE),
            query,
            &deadline,
        )?;
        info!(query, matches = results.len(), "search complete");
        Ok(results)
    }

    /// Removes **everything** in the store.
    ///
    /// This flushes all namespaces, not just catalog data - there is no
    /// scoped deletion path.
    ///
    /// # Errors
    ///
    /// Returns an error on connectivity failure.
    pub fn flush(&self) -> CoreResult<()> {
        self.connect()?;
        warn!("flushing the entire store, all namespaces included");
        self.store.flush_all()?;
        Ok(())
    }

    /// Health round-trip at operation start, retried under the bounded
    /// policy for transient connectivity failures.
    fn connect(&self) -> CoreResult<()> {
        let retry = self.config.retry;
        let mut attempt = 0u32;
        loop {
            match self.store.ping() {
                Ok(()) => return Ok(()),
                Err(err) if attempt < retry.max_retries => {
                    attempt += 1;
                    debug!(%err, attempt, "store ping failed, retrying");
                    thread::sleep(retry.backoff * attempt);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
