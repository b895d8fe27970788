//! Window management module for scwidget
//!
//! This module owns the borderless overlay window: its geometry and
//! resize/drag state machine, translation of winit events, frame painting
//! and the winit application handler that ties them together.

use crate::window::geometry::{MAX_SIZE, MIN_SIZE};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::window::{WindowAttributes, WindowLevel};

pub mod caption;
pub mod controller;
pub mod drag;
pub mod events;
pub mod frame;
pub mod geometry;
pub mod resize;
pub mod winit_window;

pub use controller::{
    ControllerUpdate, FramelessController, GestureState, NativeGesture, PointerRegion,
};
pub use events::{EventTranslator, InputEvent, Shortcut};
pub use geometry::{Point, Size, WindowGeometry};
pub use resize::{ResizeEdge, ResizeSession};
pub use winit_window::{run, OverlayApp, UserEvent};
pub use winit::window::CursorIcon;

/// Stacking layer of the overlay window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowLayer {
    #[default]
    Normal,
    AlwaysOnTop,
}

impl WindowLayer {
    pub fn from_always_on_top(always_on_top: bool) -> Self {
        if always_on_top {
            WindowLayer::AlwaysOnTop
        } else {
            WindowLayer::Normal
        }
    }

    pub fn is_always_on_top(&self) -> bool {
        matches!(self, WindowLayer::AlwaysOnTop)
    }

    pub fn to_window_level(&self) -> WindowLevel {
        match self {
            WindowLayer::Normal => WindowLevel::Normal,
            WindowLayer::AlwaysOnTop => WindowLevel::AlwaysOnTop,
        }
    }
}

/// Window chrome configuration handed to the toolkit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowChrome {
    /// Window title
    pub title: String,

    /// System title bar and borders
    pub decorations: bool,

    /// Transparent window background
    pub transparent: bool,

    /// Stacking layer
    pub layer: WindowLayer,
}

impl WindowChrome {
    /// Borderless overlay chrome
    pub fn overlay(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            decorations: false,
            transparent: true,
            layer: WindowLayer::Normal,
        }
    }

    /// Attributes for creating a window at `geometry`
    ///
    /// The size limits are also handed to the window system, which enforces
    /// them for compositor-driven resizes.
    pub fn window_attributes(&self, geometry: &WindowGeometry) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.title.clone())
            .with_decorations(self.decorations)
            .with_transparent(self.transparent)
            .with_resizable(true)
            .with_window_level(self.layer.to_window_level())
            .with_position(PhysicalPosition::new(geometry.x, geometry.y))
            .with_inner_size(PhysicalSize::new(
                geometry.width.max(1) as u32,
                geometry.height.max(1) as u32,
            ))
            .with_min_inner_size(PhysicalSize::new(MIN_SIZE.width as u32, MIN_SIZE.height as u32))
            .with_max_inner_size(PhysicalSize::new(MAX_SIZE.width as u32, MAX_SIZE.height as u32))
    }
}
