use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::PickerSettings;

const SETTINGS_FILE_NAME: &str = "picker.toml";

/// Reads picker settings from a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file under the platform config directory, falling back to
    /// the working directory when no home directory is known.
    pub fn default_path() -> PathBuf {
        match ProjectDirs::from("com", "DeliveryDatePicker", "DeliveryDatePicker") {
            Some(dirs) => dirs.config_dir().join(SETTINGS_FILE_NAME),
            None => PathBuf::from(SETTINGS_FILE_NAME),
        }
    }

    /// Load settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::info!("No settings at {}, using defaults", self.path.display());
            return Ok(PickerSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: PickerSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Feed location from the settings, resolved against the settings file's
    /// directory when relative.
    pub fn resolve_options_path(&self, settings: &PickerSettings) -> Option<PathBuf> {
        let configured = settings.options_path.as_ref()?;
        if configured.is_absolute() {
            return Some(configured.clone());
        }
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(configured))
    }
}
