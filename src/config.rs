/// Page configuration
///
/// Read once at startup from `<config dir>/cat-page/config.json`:
/// - Linux: ~/.config/cat-page/config.json
/// - macOS: ~/Library/Application Support/cat-page/config.json
/// - Windows: %APPDATA%\cat-page\config.json
///
/// Every field is optional. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::state::page::PresenterMode;
use crate::state::timer::DEFAULT_SLIDE_INTERVAL;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PageConfig {
    /// Manual carousel or auto-advancing slideshow
    pub presenter: PresenterMode,
    /// Time each slide stays on screen in auto-advance mode
    pub slide_interval_ms: u64,
    /// Use the dark theme instead of the light one
    pub dark_theme: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            presenter: PresenterMode::default(),
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL.as_millis() as u64,
            dark_theme: false,
        }
    }
}

impl PageConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.slide_interval_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.slide_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "slide_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from an explicit path. Ok(None) if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&json).map(Some)
    }

    /// Load from the default location, falling back to defaults on any problem
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("⚠️  Could not determine config directory, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                tracing::info!("📁 Loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!("⚠️  Ignoring {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Get the path where the config file is expected
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("cat-page");
        path.push("config.json");
        Some(path)
    }
}
