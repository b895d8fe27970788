//! Error types for scwidget
//!
//! The frameless window logic itself never fails: rejected geometries and
//! missing settings are handled by substitution. These errors cover the host
//! side (event loop, window creation, web view, config and settings files).
//! We use thiserror for the library error type and anyhow at the binary edge.

use thiserror::Error;

/// Main error type for scwidget
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Window or event-loop errors
    #[error("Window error: {0}")]
    Window(String),

    /// Embedded content view errors
    #[error("Content view error: {0}")]
    Content(String),

    /// Tray icon errors
    #[error("Tray error: {0}")]
    Tray(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persisted display settings errors
    #[error("Settings error: {0}")]
    Settings(String),

    /// Caption font errors
    #[error("Font error: {0}")]
    Font(String),
}

/// Convenience type alias for Results in scwidget
pub type Result<T> = std::result::Result<T, WidgetError>;

/// Extension trait for converting other errors to WidgetError
pub trait IntoWidgetError<T> {
    /// Convert this error into a WidgetError with the given context
    fn window_err(self, context: &str) -> Result<T>;
    fn content_err(self, context: &str) -> Result<T>;
    fn tray_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
    fn settings_err(self, context: &str) -> Result<T>;
    fn font_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoWidgetError<T> for std::result::Result<T, E> {
    fn window_err(self, context: &str) -> Result<T> {
        self.map_err(|e| WidgetError::Window(format!("{}: {}", context, e)))
    }

    fn content_err(self, context: &str) -> Result<T> {
        self.map_err(|e| WidgetError::Content(format!("{}: {}", context, e)))
    }

    fn tray_err(self, context: &str) -> Result<T> {
        self.map_err(|e| WidgetError::Tray(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| WidgetError::Config(format!("{}: {}", context, e)))
    }

    fn settings_err(self, context: &str) -> Result<T> {
        self.map_err(|e| WidgetError::Settings(format!("{}: {}", context, e)))
    }

    fn font_err(self, context: &str) -> Result<T> {
        self.map_err(|e| WidgetError::Font(format!("{}: {}", context, e)))
    }
}
