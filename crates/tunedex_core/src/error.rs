//! Error types for the catalog core.

use std::io;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in catalog operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Store round-trip or connectivity failure.
    #[error("store error: {0}")]
    Store(#[from] tunedex_store::StoreError),

    /// Record codec failure.
    #[error("codec error: {0}")]
    Codec(#[from] tunedex_codec::CodecError),

    /// I/O error while reading an ingestion source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The allocator found no free identifier within its attempt budget.
    #[error("identifier space exhausted in namespace {namespace}: {attempts} attempts")]
    IdSpaceExhausted {
        /// Namespace that could not be allocated in.
        namespace: String,
        /// Number of draws attempted.
        attempts: usize,
    },

    /// The operation deadline passed at a round-trip boundary.
    #[error("operation deadline exceeded after {elapsed_ms}ms")]
    DeadlineExceeded {
        /// Milliseconds elapsed since the operation started.
        elapsed_ms: u64,
    },
}

impl CoreError {
    /// Creates an identifier exhaustion error.
    pub fn id_space_exhausted(namespace: impl Into<String>, attempts: usize) -> Self {
        Self::IdSpaceExhausted {
            namespace: namespace.into(),
            attempts,
        }
    }

    /// Creates a deadline exceeded error.
    pub fn deadline_exceeded(elapsed_ms: u64) -> Self {
        Self::DeadlineExceeded { elapsed_ms }
    }
}
