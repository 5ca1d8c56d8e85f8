//! Record to field-map encoding.

use crate::record::{
    Song, FIELD_ALBUM, FIELD_ARTIST, FIELD_DURATION_SECS, FIELD_ID, FIELD_TITLE, FIELD_YEAR,
};
use tunedex_store::FieldMap;

/// Encodes a song into its stored field map.
///
/// Text fields are copied verbatim; numeric fields are formatted as
/// base-10 decimal strings. Encoding performs no I/O and cannot fail.
#[must_use]
pub fn encode_song(song: &Song) -> FieldMap {
    let mut fields = FieldMap::with_capacity(6);
    fields.insert(FIELD_ID.to_string(), song.id.clone());
    fields.insert(FIELD_TITLE.to_string(), song.title.clone());
    fields.insert(FIELD_ARTIST.to_string(), song.artist.clone());
    fields.insert(FIELD_YEAR.to_string(), song.year.to_string());
    fields.insert(FIELD_ALBUM.to_string(), song.album.clone());
    fields.insert(
        FIELD_DURATION_SECS.to_string(),
        song.duration_secs.to_string(),
    );
    fields
}
