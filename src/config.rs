use std::path::Path;

use crate::error::ConfigError;

/// Default location of the config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "sumdiff.toml";

const MIN_WINDOW_WIDTH: f32 = 600.0;
const MIN_WINDOW_HEIGHT: f32 = 500.0;
const MAX_WIN_PAUSE_MS: u64 = 60_000;

/// Window geometry
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 900.0,
            height: 700.0,
        }
    }
}

/// Presentation settings, loadable from TOML. The game rules themselves are
/// fixed and not configurable.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long a won board stays on screen before the game-over dialog
    pub win_pause_ms: u64,
    /// Show the current best directional scores in the side panel
    pub show_scores: bool,
    pub window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            win_pause_ms: 2000,
            show_scores: true,
            window: WindowConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window.width >= MIN_WINDOW_WIDTH) {
            return Err(ConfigError::Validation(format!(
                "window.width must be >= {MIN_WINDOW_WIDTH}"
            )));
        }
        if !(self.window.height >= MIN_WINDOW_HEIGHT) {
            return Err(ConfigError::Validation(format!(
                "window.height must be >= {MIN_WINDOW_HEIGHT}"
            )));
        }
        if self.win_pause_ms > MAX_WIN_PAUSE_MS {
            return Err(ConfigError::Validation(format!(
                "win_pause_ms must be <= {MAX_WIN_PAUSE_MS}"
            )));
        }
        Ok(())
    }

    pub fn win_pause(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.win_pause_ms)
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
