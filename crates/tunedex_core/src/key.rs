//! Key naming: namespaces and record identifiers.

use rand::Rng;
use std::fmt;

/// Namespace for song records.
pub const SONG_NAMESPACE: &str = "song";

/// Number of decimal digits in a record identifier.
pub const RECORD_ID_DIGITS: usize = 5;

/// Largest value a record identifier can take.
pub const MAX_RECORD_ID: u32 = 99_999;

/// The unique suffix distinguishing records within a namespace.
///
/// Identifiers are five zero-padded decimal digits (`00000`-`99999`),
/// immutable once allocated and externally visible. Uniqueness is
/// guaranteed by the allocator at write time, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Creates an identifier from a number.
    ///
    /// Returns `None` if the number does not fit in five digits.
    #[must_use]
    pub fn from_number(n: u32) -> Option<Self> {
        if n > MAX_RECORD_ID {
            return None;
        }
        Some(Self(format!("{n:05}")))
    }

    /// Draws a uniformly random identifier.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let n = rng.gen_range(0..=MAX_RECORD_ID);
        Self(format!("{n:05}"))
    }

    /// Parses an identifier from its text form.
    ///
    /// Returns `None` unless the input is exactly five ASCII digits.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text.len() == RECORD_ID_DIGITS && text.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(text.to_string()))
        } else {
            None
        }
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

/// Forms the store key for a record: `<namespace>:<identifier>`.
#[must_use]
pub fn record_key(namespace: &str, id: &RecordId) -> String {
    format!("{namespace}:{id}")
}

/// Forms the scan pattern covering every key in a namespace.
#[must_use]
pub fn scan_pattern(namespace: &str) -> String {
    format!("{namespace}:*")
}
