//! Flat-file ingestion source.
//!
//! The ingestion format is one record per line, comma-separated, fields
//! in order `title, artist, year, album, duration_secs`, whitespace
//! trimmed per field. Identifiers are never part of the source; they
//! are assigned at ingest time.

use crate::error::CoreResult;
use std::io::BufRead;
use thiserror::Error;
use tracing::warn;
use tunedex_codec::{CodecError, Song, FIELD_DURATION_SECS, FIELD_ID, FIELD_YEAR};

/// Number of comma-separated fields in a source line.
pub const SONG_LINE_FIELDS: usize = 5;

/// Why a source line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line did not split into the expected number of fields.
    #[error("expected {SONG_LINE_FIELDS} comma-separated fields, found {found}")]
    FieldCount {
        /// Number of fields found on the line.
        found: usize,
    },

    /// A field failed numeric parsing or completeness validation.
    #[error(transparent)]
    Invalid(#[from] CodecError),
}

/// A source line that was rejected, with its position and reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// One-based line number in the source.
    pub line_number: usize,
    /// The raw line text.
    pub line: String,
    /// Why the line was rejected.
    pub reason: LineError,
}

/// Outcome of parsing an ingestion source.
///
/// Line outcomes are independent: a rejected line never drops its
/// neighbors.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// Songs parsed successfully, in source order, ids unassigned.
    pub songs: Vec<Song>,
    /// Lines that were rejected.
    pub rejected: Vec<RejectedLine>,
}

/// Parses every line of an ingestion source.
///
/// Blank lines are skipped. A malformed line is rejected and reported -
/// a malformed numeric field rejects its line rather than defaulting to
/// zero, which would persist a record that can never round-trip.
///
/// # Errors
///
/// Returns an error only when reading from the source itself fails;
/// malformed content is reported per line in the [`ParseReport`].
pub fn parse_songs<R: BufRead>(reader: R) -> CoreResult<ParseReport> {
    let mut report = ParseReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Ok(song) => report.songs.push(song),
            Err(reason) => {
                warn!(line = line_number, %reason, "rejecting ingestion line");
                report.rejected.push(RejectedLine {
                    line_number,
                    line,
                    reason,
                });
            }
        }
    }
    Ok(report)
}

/// Parses a single source line into a song with an unassigned id.
///
/// # Errors
///
/// Returns a [`LineError`] describing the first problem found.
pub fn parse_line(line: &str) -> Result<Song, LineError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != SONG_LINE_FIELDS {
        return Err(LineError::FieldCount { found: parts.len() });
    }

    let year = parts[2]
        .parse::<u32>()
        .map_err(|_| CodecError::invalid_numeric_field(FIELD_YEAR, parts[2]))?;
    let duration_secs = parts[4]
        .parse::<u32>()
        .map_err(|_| CodecError::invalid_numeric_field(FIELD_DURATION_SECS, parts[4]))?;

    let song = Song {
        id: String::new(),
        title: parts[0].to_string(),
        artist: parts[1].to_string(),
        year,
        album: parts[3].to_string(),
        duration_secs,
    };

    // The id is assigned later; everything else must be filled now.
    let missing: Vec<&str> = song
        .missing_fields()
        .into_iter()
        .filter(|field| *field != FIELD_ID)
        .collect();
    if !missing.is_empty() {
        return Err(CodecError::incomplete_record(&missing).into());
    }
    Ok(song)
}
