//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random test data that maintains
//! required invariants - generated songs are always complete.

use proptest::prelude::*;
use tunedex_codec::Song;
use tunedex_core::{RecordId, MAX_RECORD_ID};

/// Strategy for non-blank printable text fields.
pub fn text_field() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{1,32}")
        .expect("valid regex")
        .prop_filter("field must not be blank", |s| !s.trim().is_empty())
        .prop_map(|s| s.trim().to_string())
}

/// Strategy for valid record identifiers.
pub fn record_id() -> impl Strategy<Value = RecordId> {
    (0u32..=MAX_RECORD_ID).prop_map(|n| RecordId::from_number(n).expect("in range"))
}

/// Strategy for complete songs with assigned identifiers.
pub fn complete_song() -> impl Strategy<Value = Song> {
    (
        record_id(),
        text_field(),
        text_field(),
        1u32..=9999,
        text_field(),
        1u32..=36_000,
    )
        .prop_map(|(id, title, artist, year, album, duration_secs)| Song {
            id: id.as_str().to_string(),
            title,
            artist,
            year,
            album,
            duration_secs,
        })
}

/// Strategy for batches of complete songs.
pub fn song_batch(max: usize) -> impl Strategy<Value = Vec<Song>> {
    prop::collection::vec(complete_song(), 0..max)
}
