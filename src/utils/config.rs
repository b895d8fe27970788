//! Configuration management for scwidget
//!
//! Application configuration is static for a run (which page to embed, where
//! to keep settings, how loud to log). It is distinct from the display
//! settings in [`crate::settings`], which the widget rewrites as the user
//! interacts with it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::utils::error::{IntoWidgetError, Result, WidgetError};

/// Organization namespace under the platform config directory
pub const ORGANIZATION: &str = "stalcraft.widgets";

/// Application name inside the organization namespace
pub const APPLICATION: &str = "widget";

/// Page embedded by default
pub const DEFAULT_URL: &str = "https://stalcraft.wiki/maps";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title, also shown in the task switcher
    pub title: String,

    /// Page loaded into the content view
    pub url: String,

    /// Caption painted in the drag strip, empty for none
    pub caption: String,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Restore geometry, zoom and always-on-top from the previous session
    pub remember_window_state: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Override for the display settings file
    pub settings_path: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "STALCRAFT Widget".to_string(),
            url: DEFAULT_URL.to_string(),
            caption: ORGANIZATION.to_string(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            remember_window_state: true,
            log_level: "info".to_string(),
            settings_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from various sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. User config file (~/.config/stalcraft.widgets/config.toml on Linux)
    /// 3. Environment variables (SCWIDGET_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config = Self::from_file(&user_path)?;
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Read a configuration file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .config_err("Failed to read config file")?;

        toml::from_str(&contents).config_err("Failed to parse config file")
    }

    /// Path of the display settings file
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.general
            .settings_path
            .clone()
            .or_else(|| namespace_dir().map(|dir| dir.join(format!("{}.toml", APPLICATION))))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SCWIDGET_URL") {
            self.window.url = url;
        }

        if let Ok(log_level) = std::env::var("SCWIDGET_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        if let Ok(path) = std::env::var("SCWIDGET_SETTINGS_PATH") {
            self.general.settings_path = Some(PathBuf::from(path));
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(self.window.url.starts_with("https://") || self.window.url.starts_with("http://")) {
            return Err(WidgetError::Config(format!(
                "Content URL must be http(s), got '{}'",
                self.window.url
            )));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(WidgetError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level,
                valid_log_levels
            )));
        }

        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        namespace_dir().map(|dir| dir.join("config.toml"))
    }
}

/// `<config_dir>/stalcraft.widgets`
fn namespace_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(ORGANIZATION))
}
