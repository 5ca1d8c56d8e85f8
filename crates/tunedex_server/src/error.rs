//! Error types and status mapping for the catalog server.

use thiserror::Error;
use tunedex_core::CoreError;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur while serving catalog requests.
///
/// Every variant maps to a distinct HTTP status code; failures are
/// never dressed up as successes.
#[derive(Error, Debug)]
pub enum ServerError {
    /// No route matches the request path.
    #[error("no route for path: {path}")]
    NotFound {
        /// The unmatched path.
        path: String,
    },

    /// The route exists but is not implemented yet.
    #[error("not implemented: {what}")]
    NotImplemented {
        /// The stubbed capability.
        what: String,
    },

    /// The backing store could not be reached.
    #[error("store unavailable: {message}")]
    StoreUnavailable {
        /// Description of the connectivity failure.
        message: String,
    },

    /// The operation ran past its deadline.
    #[error("operation timed out: {message}")]
    Timeout {
        /// Description of the timeout.
        message: String,
    },

    /// The ingestion source could not be read.
    #[error("cannot read ingestion source: {message}")]
    SourceUnreadable {
        /// Description of the read failure.
        message: String,
    },

    /// Any other internal failure.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the failure.
        message: String,
    },
}

impl ServerError {
    /// Creates a not-found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a not-implemented error.
    pub fn not_implemented(what: impl Into<String>) -> Self {
        Self::NotImplemented { what: what.into() }
    }

    /// Returns the HTTP status code this error maps to.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::NotImplemented { .. } => 501,
            Self::StoreUnavailable { .. } => 503,
            Self::Timeout { .. } => 504,
            Self::SourceUnreadable { .. } | Self::Internal { .. } => 500,
        }
    }

    /// Returns true if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Returns true if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Store(store) => Self::StoreUnavailable {
                message: store.to_string(),
            },
            CoreError::DeadlineExceeded { .. } => Self::Timeout {
                message: err.to_string(),
            },
            CoreError::Io(io) => Self::SourceUnreadable {
                message: io.to_string(),
            },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}
