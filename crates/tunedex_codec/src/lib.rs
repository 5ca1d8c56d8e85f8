//! # Tunedex Codec
//!
//! Record model and bidirectional record/field-map codec for Tunedex.
//!
//! Records are persisted as flat string field maps - the only value type
//! the store capability understands. This crate owns the mapping in both
//! directions:
//!
//! - Encoding never fails: every field has a string rendering, numeric
//!   fields as base-10 decimals.
//! - Decoding re-parses numeric fields, ignores unrecognized field names
//!   (forward-compatible), and validates the result for completeness.
//!
//! ## Round-trip guarantee
//!
//! For every complete [`Song`] `s`, `decode_song(&encode_song(&s))`
//! returns `s` exactly.
//!
//! ## Example
//!
//! ```
//! use tunedex_codec::{decode_song, encode_song, Song};
//!
//! let song = Song {
//!     id: "00001".to_string(),
//!     title: "So What".to_string(),
//!     artist: "Miles Davis".to_string(),
//!     year: 1959,
//!     album: "Kind of Blue".to_string(),
//!     duration_secs: 562,
//! };
//! let fields = encode_song(&song);
//! assert_eq!(decode_song(&fields).unwrap(), song);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod record;

pub use decoder::decode_song;
pub use encoder::encode_song;
pub use error::{CodecError, CodecResult};
pub use record::{
    Album, Song, FIELD_ALBUM, FIELD_ARTIST, FIELD_DURATION_SECS, FIELD_ID, FIELD_TITLE, FIELD_YEAR,
};
