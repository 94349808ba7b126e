//! Loading and saving [`CountdownSettings`] as TOML.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::models::settings::{CountdownSettings, SettingsError};

pub const SETTINGS_FILE_NAME: &str = "countdown.toml";

/// `<platform config dir>/countdown.toml`, or the current directory when the
/// platform has no home directory.
pub fn default_settings_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "EventCountdown", "EventCountdown") {
        dirs.config_dir().join(SETTINGS_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE_NAME)
    }
}

/// Reads settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<CountdownSettings, SettingsError> {
    if !path.exists() {
        log::info!("No settings at {}, using defaults", path.display());
        return Ok(CountdownSettings::default());
    }

    let data = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: CountdownSettings = toml::from_str(&data).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.validate()?;

    log::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &CountdownSettings) -> Result<(), SettingsError> {
    settings.validate()?;

    let io_error = |source: std::io::Error| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let data = toml::to_string_pretty(settings)?;
    fs::write(path, data).map_err(io_error)?;
    Ok(())
}
