//! Field-map to record decoding.

use crate::error::{CodecError, CodecResult};
use crate::record::{
    Song, FIELD_ALBUM, FIELD_ARTIST, FIELD_DURATION_SECS, FIELD_ID, FIELD_TITLE, FIELD_YEAR,
};
use tunedex_store::FieldMap;

/// Decodes a stored field map into a song.
///
/// Recognized field names are copied or parsed; unrecognized names are
/// ignored so older readers keep working against newer writers. After
/// assignment the song is validated for completeness.
///
/// # Errors
///
/// - [`CodecError::InvalidNumericField`] when a numeric field does not
///   parse; decoding of that record is aborted.
/// - [`CodecError::IncompleteRecord`] when any required field is absent
///   or empty after assignment.
pub fn decode_song(fields: &FieldMap) -> CodecResult<Song> {
    let mut song = Song::default();

    for (name, value) in fields {
        match name.as_str() {
            FIELD_ID => song.id = value.clone(),
            FIELD_TITLE => song.title = value.clone(),
            FIELD_ARTIST => song.artist = value.clone(),
            FIELD_YEAR => song.year = parse_numeric(FIELD_YEAR, value)?,
            FIELD_ALBUM => song.album = value.clone(),
            FIELD_DURATION_SECS => song.duration_secs = parse_numeric(FIELD_DURATION_SECS, value)?,
            _ => {}
        }
    }

    let missing = song.missing_fields();
    if !missing.is_empty() {
        return Err(CodecError::incomplete_record(&missing));
    }
    Ok(song)
}

fn parse_numeric(field: &str, value: &str) -> CodecResult<u32> {
    value
        .parse::<u32>()
        .map_err(|_| CodecError::invalid_numeric_field(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_song;

    fn complete_song() -> Song {
        Song {
            id: "00042".to_string(),
            title: "Blue in Green".to_string(),
            artist: "Miles Davis".to_string(),
            year: 1959,
            album: "Kind of Blue".to_string(),
            duration_secs: 337,
        }
    }

    #[test]
    fn decodes_complete_map() {
        let song = complete_song();
        let decoded = decode_song(&encode_song(&song)).unwrap();
        assert_eq!(decoded, song);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut fields = encode_song(&complete_song());
        fields.insert("producer".to_string(), "Teo Macero".to_string());
        fields.insert("bpm".to_string(), "not-a-number".to_string());

        let decoded = decode_song(&fields).unwrap();
        assert_eq!(decoded, complete_song());
    }

    #[test]
    fn bad_year_aborts_decoding() {
        let mut fields = encode_song(&complete_song());
        fields.insert(FIELD_YEAR.to_string(), "nineteen-59".to_string());

        let err = decode_song(&fields).unwrap_err();
        assert_eq!(
            err,
            CodecError::invalid_numeric_field(FIELD_YEAR, "nineteen-59")
        );
    }

    #[test]
    fn bad_duration_aborts_decoding() {
        let mut fields = encode_song(&complete_song());
        fields.insert(FIELD_DURATION_SECS.to_string(), "5m37s".to_string());

        assert!(matches!(
            decode_song(&fields),
            Err(CodecError::InvalidNumericField { .. })
        ));
    }

    #[test]
    fn missing_field_is_incomplete() {
        for field in [
            FIELD_ID,
            FIELD_TITLE,
            FIELD_ARTIST,
            FIELD_YEAR,
            FIELD_ALBUM,
            FIELD_DURATION_SECS,
        ] {
            let mut fields = encode_song(&complete_song());
            fields.remove(field);

            let err = decode_song(&fields).unwrap_err();
            match err {
                CodecError::IncompleteRecord { missing } => {
                    assert!(missing.contains(field), "{missing} should name {field}");
                }
                other => panic!("expected IncompleteRecord, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_string_field_is_incomplete() {
        let mut fields = encode_song(&complete_song());
        fields.insert(FIELD_ARTIST.to_string(), String::new());

        assert!(matches!(
            decode_song(&fields),
            Err(CodecError::IncompleteRecord { .. })
        ));
    }

    #[test]
    fn empty_map_is_incomplete() {
        let err = decode_song(&FieldMap::new()).unwrap_err();
        assert!(matches!(err, CodecError::IncompleteRecord { .. }));
    }
}
