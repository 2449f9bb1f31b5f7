use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::AlbumSettings;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Where settings live when no explicit path is given.
pub fn default_settings_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "MemoryAlbum", "MemoryAlbum") {
        dirs.config_dir().join(SETTINGS_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE_NAME)
    }
}

/// Loads and saves [`AlbumSettings`] as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default_location() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<AlbumSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings at {}, using defaults",
                self.path.display()
            );
            return Ok(AlbumSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: AlbumSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Update settings
    pub fn save(&self, settings: &AlbumSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}
