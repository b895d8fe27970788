//! scwidget - a borderless overlay window for the STALCRAFT map viewer
//!
//! The window can be resized from any border (Shift locks 16:9), moved by
//! the strip along its top edge, and remembers its geometry, zoom and
//! always-on-top state between runs.

pub mod content;
pub mod settings;
#[cfg(feature = "tray")]
pub mod tray;
pub mod utils;
pub mod widget;
pub mod window;

pub use content::{ContentView, DetachedContentView};
pub use settings::{
    DisplaySettings, MemorySettingsStore, SettingsForm, SettingsStore, TomlSettingsStore,
};
pub use utils::error::{Result, WidgetError};
pub use widget::{HostAction, Widget};
pub use window::{FramelessController, WindowChrome, WindowGeometry, WindowLayer};
