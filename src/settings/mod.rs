//! Persisted display settings
//!
//! Zoom, always-on-top and window geometry survive restarts through a
//! [`SettingsStore`]. Loading never fails: a missing file, a missing key or
//! an unreadable value falls back to the documented default.

use crate::utils::error::{IntoWidgetError, Result};
use crate::window::geometry::WindowGeometry;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub mod dialog;
#[cfg(feature = "webview")]
pub mod surface;

pub use dialog::SettingsForm;

/// The persisted subset of widget state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Content zoom, 1.0 = 100%
    pub zoom_factor: f64,

    /// Keep the overlay above other windows
    pub always_on_top: bool,

    /// Window rectangle in screen pixels
    pub geometry: WindowGeometry,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            zoom_factor: 1.0,
            always_on_top: false,
            geometry: WindowGeometry::default(),
        }
    }
}

impl DisplaySettings {
    /// Replace values no window could use with their defaults
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let zoom_factor = if self.zoom_factor.is_finite() && self.zoom_factor > 0.0 {
            self.zoom_factor
        } else {
            defaults.zoom_factor
        };
        let geometry = if self.geometry.width > 0 && self.geometry.height > 0 {
            self.geometry
        } else {
            defaults.geometry
        };

        Self { zoom_factor, always_on_top: self.always_on_top, geometry }
    }
}

/// Typed access to the persistence mechanism
pub trait SettingsStore {
    /// Read the stored settings, substituting defaults for anything missing
    fn load(&self) -> DisplaySettings;

    /// Replace the stored settings
    fn save(&self, settings: &DisplaySettings) -> Result<()>;
}

/// Settings kept in a TOML file
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<DisplaySettings>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)
            .settings_err("Failed to read settings file")?;
        let settings: DisplaySettings = toml::from_str(&contents)
            .settings_err("Failed to parse settings file")?;

        Ok(Some(settings))
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> DisplaySettings {
        match self.read() {
            Ok(Some(settings)) => {
                debug!("Loaded display settings from {:?}", self.path);
                settings.sanitized()
            }
            Ok(None) => {
                info!("No display settings at {:?}, using defaults", self.path);
                DisplaySettings::default()
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                DisplaySettings::default()
            }
        }
    }

    fn save(&self, settings: &DisplaySettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .settings_err("Failed to create settings directory")?;
        }

        let toml = toml::to_string_pretty(settings)
            .settings_err("Failed to serialize settings")?;

        std::fs::write(&self.path, toml)
            .settings_err("Failed to write settings file")?;

        debug!("Saved display settings to {:?}", self.path);
        Ok(())
    }
}

/// Settings held in memory
///
/// Clones share the same slot, so a test can keep one handle and give the
/// other to a widget.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    slot: Rc<RefCell<Option<DisplaySettings>>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `settings`
    pub fn with_settings(settings: DisplaySettings) -> Self {
        let store = Self::new();
        *store.slot.borrow_mut() = Some(settings);
        store
    }

    /// Last saved settings, if any
    pub fn saved(&self) -> Option<DisplaySettings> {
        *self.slot.borrow()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> DisplaySettings {
        self.saved().map(DisplaySettings::sanitized).unwrap_or_default()
    }

    fn save(&self, settings: &DisplaySettings) -> Result<()> {
        *self.slot.borrow_mut() = Some(*settings);
        Ok(())
    }
}

/// Store that forgets everything (`--reset`, or state remembering disabled)
#[derive(Debug, Clone, Copy, Default)]
pub struct EphemeralSettingsStore;

impl SettingsStore for EphemeralSettingsStore {
    fn load(&self) -> DisplaySettings {
        DisplaySettings::default()
    }

    fn save(&self, _settings: &DisplaySettings) -> Result<()> {
        Ok(())
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn load(&self) -> DisplaySettings {
        (**self).load()
    }

    fn save(&self, settings: &DisplaySettings) -> Result<()> {
        (**self).save(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DisplaySettings {
        DisplaySettings {
            zoom_factor: 1.25,
            always_on_top: true,
            geometry: WindowGeometry::new(40, 60, 800, 450),
        }
    }

    #[test]
    fn test_defaults() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.zoom_factor, 1.0);
        assert!(!settings.always_on_top);
        assert_eq!(settings.geometry, WindowGeometry::new(0, 0, 1024, 576));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlSettingsStore::new(dir.path().join("widget.toml"));
        assert_eq!(store.load(), DisplaySettings::default());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlSettingsStore::new(dir.path().join("nested").join("widget.toml"));

        store.save(&sample()).unwrap();
        assert_eq!(TomlSettingsStore::new(store.path()).load(), sample());
    }

    #[test]
    fn test_missing_keys_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widget.toml");
        std::fs::write(&path, "always_on_top = true\n").unwrap();

        let settings = TomlSettingsStore::new(&path).load();
        assert!(settings.always_on_top);
        assert_eq!(settings.zoom_factor, 1.0);
        assert_eq!(settings.geometry, WindowGeometry::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widget.toml");
        std::fs::write(&path, "zoom_factor = \"big\"\n[[[").unwrap();

        assert_eq!(TomlSettingsStore::new(&path).load(), DisplaySettings::default());
    }

    #[test]
    fn test_sanitized() {
        let broken = DisplaySettings {
            zoom_factor: f64::NAN,
            always_on_top: true,
            geometry: WindowGeometry::new(5, 5, 0, 300),
        };
        let fixed = broken.sanitized();
        assert_eq!(fixed.zoom_factor, 1.0);
        assert!(fixed.always_on_top);
        assert_eq!(fixed.geometry, WindowGeometry::default());
    }

    #[test]
    fn test_memory_store_shares_slot() {
        let store = MemorySettingsStore::new();
        let handle = store.clone();
        assert_eq!(handle.saved(), None);

        store.save(&sample()).unwrap();
        assert_eq!(handle.saved(), Some(sample()));
        assert_eq!(handle.load(), sample());
    }
}
