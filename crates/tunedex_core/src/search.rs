//! Cursor-driven free-text search over the keyspace.

use crate::config::Deadline;
use crate::error::CoreResult;
use tracing::warn;
use tunedex_codec::{decode_song, Song};
use tunedex_store::{FieldMap, KvStore};

/// Scans a namespace incrementally and accumulates matching records.
///
/// The engine never loads the full keyspace at once: it walks the
/// store's cursor scan in batches, fetches each key's field map, and
/// applies the free-text predicate before decoding. Records that fail
/// to fetch or decode are skipped with a warning; only scan-level
/// failures abort the sweep.
///
/// Result order is "as encountered during the sweep" - store-defined
/// and not stable across calls. Callers must not rely on it.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    scan_count_hint: usize,
}

impl SearchEngine {
    /// Creates an engine with the given scan batch hint.
    #[must_use]
    pub fn new(scan_count_hint: usize) -> Self {
        Self { scan_count_hint }
    }

    /// Sweeps every key matching `pattern` and returns the records
    /// whose field values contain `query`.
    ///
    /// Matching is a case-insensitive substring test against the union
    /// of all field values: a hit on any field qualifies the whole
    /// record. An empty query therefore matches every decodable record.
    ///
    /// Provided the keyspace is not mutated during the sweep, every key
    /// matching the pattern at scan start is visited exactly once.
    ///
    /// # Errors
    ///
    /// - [`crate::CoreError::Store`] when a scan round-trip fails.
    /// - [`crate::CoreError::DeadlineExceeded`] when the operation
    ///   deadline passes at a round-trip boundary.
    pub fn search(
        &self,
        store: &dyn KvStore,
        pattern: &str,
        query: &str,
        deadline: &Deadline,
    ) -> CoreResult<Vec<Song>> {
        let needle = query.to_lowercase();
        let mut matches = Vec::new();
        let mut cursor = 0u64;

        loop {
            deadline.check()?;
            let page = store.scan(cursor, pattern, self.scan_count_hint)?;

            for key in &page.keys {
                deadline.check()?;
                let fields = match store.get_all_hash_fields(key) {
                    Ok(fields) => fields,
                    Err(err) => {
                        warn!(%key, %err, "skipping record: fetch failed");
                        continue;
                    }
                };

                if !any_field_contains(&fields, &needle) {
                    continue;
                }
                match decode_song(&fields) {
                    Ok(song) => matches.push(song),
                    Err(err) => warn!(%key, %err, "skipping record: decode failed"),
                }
            }

            if page.is_final() {
                return Ok(matches);
            }
            cursor = page.cursor;
        }
    }
}

/// The free-text predicate: case-insensitive substring over the union
/// of all field values.
fn any_field_contains(fields: &FieldMap, needle_lower: &str) -> bool {
    fields
        .values()
        .any(|value| value.to_lowercase().contains(needle_lower))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{record_key, scan_pattern, RecordId, SONG_NAMESPACE};
    use std::collections::BTreeSet;
    use std::time::Duration;
    use tunedex_codec::encode_song;
    use tunedex_store::MemoryStore;

    fn song(id: u32, title: &str, artist: &str, year: u32, album: &str) -> Song {
        Song {
            id: format!("{id:05}"),
            title: title.to_string(),
            artist: artist.to_string(),
            year,
            album: album.to_string(),
            duration_secs: 180 + id,
        }
    }

    fn put(store: &MemoryStore, song: &Song) {
        let id = RecordId::parse(&song.id).expect("test songs carry valid ids");
        store
            .set_hash(&record_key(SONG_NAMESPACE, &id), &encode_song(song))
            .unwrap();
    }

    fn titles(songs: &[Song]) -> BTreeSet<String> {
        songs.iter().map(|s| s.title.clone()).collect()
    }

    fn engine() -> SearchEngine {
        SearchEngine::new(5)
    }

    #[test]
    fn match_on_album_field_qualifies_the_record() {
        let store = MemoryStore::new();
        put(
            &store,
            &song(1, "Tangled Up", "Some Singer", 1975, "Bob Dylan's Greatest"),
        );
        put(&store, &song(2, "Other Song", "Other Artist", 1980, "Other Album"));

        let found = engine()
            .search(&store, &scan_pattern(SONG_NAMESPACE), "Dylan", &Deadline::unbounded())
            .unwrap();

        assert_eq!(titles(&found), BTreeSet::from(["Tangled Up".to_string()]));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let store = MemoryStore::new();
        put(&store, &song(1, "Hurricane", "Bob Dylan", 1976, "Desire"));

        for query in ["DYLAN", "dylan", "DyLaN"] {
            let found = engine()
                .search(&store, &scan_pattern(SONG_NAMESPACE), query, &Deadline::unbounded())
                .unwrap();
            assert_eq!(found.len(), 1, "query {query:?} should match");
        }
    }

    #[test]
    fn sweep_crosses_page_boundaries() {
        let store = MemoryStore::new();
        for n in 1..=23 {
            put(&store, &song(n, &format!("Track {n}"), "Sweep Artist", 2001, "Sweep"));
        }

        // Hint far smaller than the keyspace forces many pages.
        let found = SearchEngine::new(3)
            .search(&store, &scan_pattern(SONG_NAMESPACE), "sweep artist", &Deadline::unbounded())
            .unwrap();

        assert_eq!(found.len(), 23);
        let unique: BTreeSet<String> = found.iter().map(|s| s.id.clone()).collect();
        assert_eq!(unique.len(), 23, "each key is visited exactly once");
    }

    #[test]
    fn undecodable_record_is_skipped_not_fatal() {
        let store = MemoryStore::new();
        put(&store, &song(1, "Good One", "Searchable Artist", 1999, "Album"));

        // A record that matches the query but cannot decode.
        let mut corrupt = encode_song(&song(2, "Bad One", "Searchable Artist", 1999, "Album"));
        corrupt.insert("year".to_string(), "unknown".to_string());
        store.set_hash("song:00002", &corrupt).unwrap();

        let found = engine()
            .search(&store, &scan_pattern(SONG_NAMESPACE), "searchable", &Deadline::unbounded())
            .unwrap();

        assert_eq!(titles(&found), BTreeSet::from(["Good One".to_string()]));
    }

    #[test]
    fn records_outside_the_namespace_are_not_visited() {
        let store = MemoryStore::new();
        put(&store, &song(1, "In Scope", "Shared Needle", 1999, "Album"));

        let mut album = tunedex_store::FieldMap::new();
        album.insert("artist".to_string(), "Shared Needle".to_string());
        store.set_hash("album:00001", &album).unwrap();

        let found = engine()
            .search(&store, &scan_pattern(SONG_NAMESPACE), "shared needle", &Deadline::unbounded())
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "In Scope");
    }

    #[test]
    fn no_match_returns_empty_not_error() {
        let store = MemoryStore::new();
        put(&store, &song(1, "Something", "Someone", 1990, "Somewhere"));

        let found = engine()
            .search(&store, &scan_pattern(SONG_NAMESPACE), "absent needle", &Deadline::unbounded())
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn expired_deadline_aborts_the_sweep() {
        let store = MemoryStore::new();
        put(&store, &song(1, "Any", "Any", 1990, "Any"));

        let deadline = Deadline::start(Some(Duration::ZERO));
        let err = engine()
            .search(&store, &scan_pattern(SONG_NAMESPACE), "any", &deadline)
            .unwrap_err();
        assert!(matches!(err, crate::CoreError::DeadlineExceeded { .. }));
    }
}
