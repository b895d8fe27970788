//! Utility module for scwidget
//!
//! - Error handling with custom error types
//! - Application configuration

pub mod config;
pub mod error;

pub use config::{AppConfig, GeneralConfig, WindowConfig};
pub use error::{IntoWidgetError, Result, WidgetError};
