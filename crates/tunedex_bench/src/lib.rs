//! Shared helpers for Tunedex benchmarks.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use tunedex_codec::{encode_song, Song};
use tunedex_core::{record_key, RecordId, SONG_NAMESPACE};
use tunedex_store::{KvStore, MemoryStore};

/// Builds a complete song with fields derived from `n`.
#[must_use]
pub fn sample_song(n: u32) -> Song {
    Song {
        id: format!("{n:05}"),
        title: format!("Track {n}"),
        artist: format!("Artist {}", n % 17),
        year: 1960 + (n % 60),
        album: format!("Album {}", n % 40),
        duration_secs: 90 + (n % 300),
    }
}

/// Builds a store holding `records` songs, exactly one of which
/// carries the needle `"benchmark-needle"` in its album field.
#[must_use]
pub fn populated_store(records: u32) -> MemoryStore {
    let store = MemoryStore::new();
    for n in 0..records {
        let mut song = sample_song(n);
        if n == records / 2 {
            song.album = "benchmark-needle".to_string();
        }
        let id = RecordId::from_number(n % 100_000).expect("bench ids stay in range");
        store
            .set_hash(&record_key(SONG_NAMESPACE, &id), &encode_song(&song))
            .expect("memory store write cannot fail");
    }
    store
}
