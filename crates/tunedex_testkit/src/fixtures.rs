//! Catalog fixtures and helpers.

use std::sync::Arc;
use tunedex_codec::Song;
use tunedex_core::{Catalog, Config};
use tunedex_store::MemoryStore;

/// A catalog over an in-memory store, with the store kept reachable so
/// tests can inspect raw keys and field maps.
pub struct TestCatalog {
    /// The catalog under test.
    pub catalog: Catalog,
    /// The backing store.
    pub store: Arc<MemoryStore>,
}

impl TestCatalog {
    /// Creates a fixture with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a fixture with custom configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        let catalog = Catalog::with_config(store.clone(), config);
        Self { catalog, store }
    }

    /// Ingests the sample songs, panicking on any failure.
    pub fn ingest_samples(&self) {
        let report = self
            .catalog
            .ingest(&sample_songs())
            .expect("sample ingest failed");
        assert!(report.is_complete(), "sample ingest had failures");
    }
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a song with an unassigned id.
#[must_use]
pub fn draft_song(title: &str, artist: &str, year: u32, album: &str, duration_secs: u32) -> Song {
    Song {
        id: String::new(),
        title: title.to_string(),
        artist: artist.to_string(),
        year,
        album: album.to_string(),
        duration_secs,
    }
}

/// A small, varied set of complete songs.
#[must_use]
pub fn sample_songs() -> Vec<Song> {
    vec![
        draft_song("So What", "Miles Davis", 1959, "Kind of Blue", 562),
        draft_song("Hurricane", "Bob Dylan", 1976, "Desire", 511),
        draft_song("Teardrop", "Massive Attack", 1998, "Mezzanine", 330),
        draft_song("Paranoid Android", "Radiohead", 1997, "OK Computer", 387),
    ]
}
