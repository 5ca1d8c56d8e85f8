//! Catalog record model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored field name for the record identifier.
pub const FIELD_ID: &str = "id";
/// Stored field name for the song title.
pub const FIELD_TITLE: &str = "title";
/// Stored field name for the artist.
pub const FIELD_ARTIST: &str = "artist";
/// Stored field name for the release year.
pub const FIELD_YEAR: &str = "year";
/// Stored field name for the album.
pub const FIELD_ALBUM: &str = "album";
/// Stored field name for the duration in seconds.
pub const FIELD_DURATION_SECS: &str = "duration_secs";

/// A single catalog record.
///
/// All six fields are required: a song is complete only when every text
/// field is non-empty and every numeric field is non-zero. Incomplete
/// songs are never persisted and never returned from search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Externally visible identifier, five zero-padded decimal digits.
    pub id: String,
    /// Song title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Release year.
    pub year: u32,
    /// Album the song appears on.
    pub album: String,
    /// Duration in seconds.
    pub duration_secs: u32,
}

impl Song {
    /// Returns the required fields that are still absent or empty.
    ///
    /// An empty return means the song is complete.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.is_empty() {
            missing.push(FIELD_ID);
        }
        if self.title.is_empty() {
            missing.push(FIELD_TITLE);
        }
        if self.artist.is_empty() {
            missing.push(FIELD_ARTIST);
        }
        if self.year == 0 {
            missing.push(FIELD_YEAR);
        }
        if self.album.is_empty() {
            missing.push(FIELD_ALBUM);
        }
        if self.duration_secs == 0 {
            missing.push(FIELD_DURATION_SECS);
        }
        missing
    }

    /// Returns true when every required field is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Artist: {}, Year: {}, Album: {}, Length: {}s",
            self.id, self.title, self.artist, self.year, self.album, self.duration_secs
        )
    }
}

/// An album grouping of songs.
///
/// Part of the data model but not exercised by any store operation yet;
/// kept as the extension point for album-level ingestion and search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Performing artist.
    pub artist: String,
    /// Release year.
    pub year: u32,
    /// Songs on the album, in track order.
    pub songs: Vec<Song>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_song() -> Song {
        Song {
            id: "00001".to_string(),
            title: "So What".to_string(),
            artist: "Miles Davis".to_string(),
            year: 1959,
            album: "Kind of Blue".to_string(),
            duration_secs: 562,
        }
    }

    #[test]
    fn complete_song_has_no_missing_fields() {
        assert!(complete_song().is_complete());
        assert!(complete_song().missing_fields().is_empty());
    }

    #[test]
    fn default_song_is_incomplete() {
        let song = Song::default();
        assert!(!song.is_complete());
        assert_eq!(song.missing_fields().len(), 6);
    }

    #[test]
    fn zero_year_is_incomplete() {
        let song = Song {
            year: 0,
            ..complete_song()
        };
        assert_eq!(song.missing_fields(), vec![FIELD_YEAR]);
    }

    #[test]
    fn empty_album_is_incomplete() {
        let song = Song {
            album: String::new(),
            ..complete_song()
        };
        assert_eq!(song.missing_fields(), vec![FIELD_ALBUM]);
    }

    #[test]
    fn display_lists_every_field() {
        let text = complete_song().to_string();
        assert!(text.contains("00001"));
        assert!(text.contains("So What"));
        assert!(text.contains("Miles Davis"));
        assert!(text.contains("1959"));
        assert!(text.contains("Kind of Blue"));
        assert!(text.contains("562"));
    }
}
