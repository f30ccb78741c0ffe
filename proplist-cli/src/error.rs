//! CLI error types and exit codes.

use proplist_core::models::PropertyListError;
use proplist_core::settings::SettingsError;
use proplist_core::sync::SyncError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - settings, validation, or other local errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Sync failure - the server rejected a mutation or was unreachable
    pub const SYNC_FAILURE: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Settings error
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// The server rejected a request or was unreachable
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// Invalid list operation (bad index, unknown property, blank title)
    #[error("Invalid operation: {0}")]
    List(#[from] PropertyListError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (settings, validation, IO)
    /// - 2: Sync failure (server rejection, transport failure)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Sync(_) => exit_codes::SYNC_FAILURE,
            Self::Settings(_) | Self::List(_) | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
