//! Shared utility functions used across command modules.

use proplist_core::settings::SyncSettings;
use proplist_core::sync::{RestClient, SyncOutcome};
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::error::CliError;

/// Loads settings from the file named in CLI args (or the default
/// location) and applies command-line overrides on top.
pub fn load_settings(global: &GlobalArgs) -> Result<SyncSettings, CliError> {
    let mut settings = match &global.settings {
        Some(path) => SyncSettings::load_from(path)?,
        None => SyncSettings::load()?,
    };
    if let Some(api_root) = &global.api_root {
        settings.api_root.clone_from(api_root);
    }
    if let Some(token) = &global.token {
        settings.auth_token = Some(token.clone());
    }
    debug!(
        api_root = %settings.api_root,
        token_set = settings.auth_token.is_some(),
        "effective settings resolved"
    );
    Ok(settings)
}

/// Builds the REST client from the effective settings.
pub fn build_client(global: &GlobalArgs) -> Result<RestClient, CliError> {
    let settings = load_settings(global)?;
    Ok(RestClient::new(
        &settings.api_root,
        settings.auth_token.as_deref(),
    )?)
}

/// Creates the async runtime driving a single command.
pub fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    Ok(tokio::runtime::Runtime::new()?)
}

/// Folds a sync outcome into the command result.
///
/// The CLI never cancels its own token, so a cancelled outcome is folded
/// into the same error path as a failed commit.
pub fn check_outcome(outcome: SyncOutcome) -> Result<(), CliError> {
    match outcome {
        SyncOutcome::Reconciled => Ok(()),
        SyncOutcome::Failed { error } => Err(error.into()),
        SyncOutcome::Cancelled => Err(proplist_core::sync::SyncError::Cancelled.into()),
    }
}
