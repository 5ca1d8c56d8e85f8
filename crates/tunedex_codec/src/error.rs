//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding a field map into a record.
///
/// Encoding never fails: every record field has a string rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A numeric field held a value that does not parse as base-10.
    #[error("invalid numeric field {field}: {value:?}")]
    InvalidNumericField {
        /// Name of the offending field.
        field: String,
        /// The raw stored value.
        value: String,
    },

    /// The decoded record is missing required fields.
    #[error("incomplete record: missing {missing}")]
    IncompleteRecord {
        /// Comma-separated names of the absent or empty fields.
        missing: String,
    },
}

impl CodecError {
    /// Creates an invalid numeric field error.
    pub fn invalid_numeric_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumericField {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an incomplete record error from the missing field names.
    pub fn incomplete_record(missing: &[&str]) -> Self {
        Self::IncompleteRecord {
            missing: missing.join(", "),
        }
    }
}
