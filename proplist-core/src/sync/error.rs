//! Error types for the synchronization layer.
//!
//! Mutation failures are values: they are returned to the caller, never
//! retried and never rolled back automatically. Rollback policy belongs to
//! the caller, which can re-fetch or re-render from the error state.

/// Errors raised by the sync client and engine.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status} for {url}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        message: String,
        /// Request URL.
        url: String,
    },

    /// The request never produced a response (connect, DNS, TLS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// A 2xx response carried a body that did not decode.
    #[error("failed to decode server response: {0}")]
    Decode(String),

    /// The caller cancelled before the response was applied.
    #[error("operation cancelled before the response was applied")]
    Cancelled,
}

impl SyncError {
    /// HTTP status of an API rejection, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;
