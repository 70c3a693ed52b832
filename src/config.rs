use crate::domain::Settings;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Default settings file: <config dir>/focusdo/settings.json
pub fn default_settings_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("focusdo").join("settings.json"))
}

/// Load startup settings from a JSON file.
///
/// A missing file yields the defaults. Missing keys take their defaults too.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(settings.normalized())
}

/// Resolve startup settings from CLI options
pub fn startup_settings(config: Option<&Path>, focus_minutes: Option<u32>) -> Result<Settings> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => default_settings_path()?,
    };

    let mut settings = load_settings(&path)?;
    if let Some(minutes) = focus_minutes {
        settings.default_focus_duration = minutes;
    }

    tracing::info!(
        path = %path.display(),
        focus_minutes = settings.default_focus_duration,
        categories = settings.categories.len(),
        "loaded startup settings"
    );
    Ok(settings)
}
