//! Settings management commands.

use std::path::PathBuf;

use proplist_core::settings::SyncSettings;

use crate::cli::{GlobalArgs, SettingsCommands};
use crate::error::CliError;
use crate::util::load_settings;

/// Settings command handler
pub fn cmd_settings(global: &GlobalArgs, command: SettingsCommands) -> Result<(), CliError> {
    match command {
        SettingsCommands::Show => cmd_show(global),
        SettingsCommands::Set { api_root, token } => cmd_set(global, api_root, token),
    }
}

fn settings_path(global: &GlobalArgs) -> Result<PathBuf, CliError> {
    match &global.settings {
        Some(path) => Ok(path.clone()),
        None => Ok(SyncSettings::default_path()?),
    }
}

fn cmd_show(global: &GlobalArgs) -> Result<(), CliError> {
    let settings = load_settings(global)?;
    println!("api_root: {}", settings.api_root);
    let token = if settings.auth_token.is_some() {
        "(set)"
    } else {
        "(none)"
    };
    println!("auth_token: {token}");
    Ok(())
}

fn cmd_set(
    global: &GlobalArgs,
    api_root: Option<String>,
    token: Option<String>,
) -> Result<(), CliError> {
    let path = settings_path(global)?;
    // Saved settings never include the transient CLI/env overrides.
    let mut settings = SyncSettings::load_from(&path)?;
    if let Some(api_root) = api_root {
        settings.api_root = api_root;
    }
    if let Some(token) = token {
        settings.auth_token = Some(token);
    }
    settings.save_to(&path)?;
    println!("Settings saved to {}", path.display());
    Ok(())
}
