//! Connection settings for the sync client.
//!
//! Settings are a small TOML file under the user configuration directory.
//! Authentication itself (how the token is obtained) belongs to the host
//! platform; this layer only carries the token onto requests.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default plugin API root on a local development server.
pub const DEFAULT_API_ROOT: &str =
    "http://localhost:8065/plugins/com.mattermost.plugin-incident-response/api/v0";

const SETTINGS_DIR: &str = "proplist";
const SETTINGS_FILE: &str = "settings.toml";

/// Errors raised while loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// No user configuration directory could be determined.
    #[error("no user configuration directory available")]
    NoConfigDir,

    /// Reading or writing the settings file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML.
    #[error("failed to parse settings: {0}")]
    Parse(String),

    /// The settings could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(String),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Where the sync client connects and how it authenticates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Plugin-scoped API root, e.g.
    /// `https://chat.example.com/plugins/com.mattermost.plugin-incident-response/api/v0`.
    #[serde(default = "default_api_root")]
    pub api_root: String,
    /// Bearer token attached to every request, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_owned()
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            auth_token: None,
        }
    }
}

impl SyncSettings {
    /// The default settings file path under the user config directory.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoConfigDir`] if the platform has no user
    /// configuration directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Loads settings from `path`, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the file exists but cannot be read or
    /// parsed.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Loads settings from the default location.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the location cannot be determined or
    /// the file cannot be read or parsed.
    pub fn load() -> SettingsResult<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Saves settings to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] on serialization or I/O failure.
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize(e.to_string()))?;
        fs::write(path, text)?;
        Ok(())
    }
}
