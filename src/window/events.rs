//! Event handling for the winit window
//!
//! This module reduces winit window events to the handful of inputs the
//! widget reacts to.

use crate::window::geometry::{Point, Size};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent as WinitWindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

/// Input the widget reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Left button pressed at a window-local position
    PointerPressed(Point),

    /// Pointer moved to a window-local position
    PointerMoved(Point),

    /// Left button released
    PointerReleased,

    /// Pointer left the window
    PointerLeft,

    /// Window lost keyboard focus
    FocusLost,

    /// Aspect-ratio modifier (Shift) pressed or released
    AspectModifier(bool),

    /// Keyboard shortcut
    Shortcut(Shortcut),

    /// Window moved by the window system
    Moved(Point),

    /// Window resized by the window system
    Resized(Size),

    /// Window close requested
    CloseRequested,
}

/// Keyboard shortcuts on the overlay window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ZoomIn,
    ZoomOut,
    ToggleAlwaysOnTop,
    OpenSettings,
    Quit,
}

/// Converts winit events to widget input
pub struct EventTranslator {
    /// Current keyboard modifiers state
    modifiers: ModifiersState,

    /// Last known window-local pointer position
    pointer: Point,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self {
            modifiers: ModifiersState::empty(),
            pointer: Point::default(),
        }
    }

    /// Translate a winit window event
    pub fn translate(&mut self, event: &WinitWindowEvent) -> Option<InputEvent> {
        match event {
            WinitWindowEvent::CloseRequested => Some(InputEvent::CloseRequested),

            WinitWindowEvent::Moved(position) => {
                Some(InputEvent::Moved(Point::new(position.x, position.y)))
            }

            WinitWindowEvent::Resized(size) => Some(InputEvent::Resized(Size {
                width: size.width as i32,
                height: size.height as i32,
            })),

            WinitWindowEvent::Focused(false) => {
                // Modifier releases while unfocused may never be reported
                self.modifiers = ModifiersState::empty();
                Some(InputEvent::FocusLost)
            }

            WinitWindowEvent::CursorMoved { position, .. } => {
                self.pointer = to_point(*position);
                Some(InputEvent::PointerMoved(self.pointer))
            }

            WinitWindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

            WinitWindowEvent::MouseInput { state, button: MouseButton::Left, .. } => match state {
                ElementState::Pressed => Some(InputEvent::PointerPressed(self.pointer)),
                ElementState::Released => Some(InputEvent::PointerReleased),
            },

            WinitWindowEvent::ModifiersChanged(new_modifiers) => {
                let was_shift = self.modifiers.shift_key();
                self.modifiers = new_modifiers.state();
                let shift = self.modifiers.shift_key();
                (shift != was_shift).then_some(InputEvent::AspectModifier(shift))
            }

            WinitWindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return None;
                }
                match event.physical_key {
                    PhysicalKey::Code(code) => {
                        shortcut_for(code, self.modifiers).map(InputEvent::Shortcut)
                    }
                    PhysicalKey::Unidentified(_) => None,
                }
            }

            _ => None,
        }
    }
}

impl Default for EventTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Shortcut bound to a key pressed with `modifiers`
///
/// Every shortcut needs Ctrl (or Cmd on macOS).
pub fn shortcut_for(code: KeyCode, modifiers: ModifiersState) -> Option<Shortcut> {
    if !(modifiers.control_key() || modifiers.super_key()) {
        return None;
    }

    match code {
        KeyCode::Equal | KeyCode::NumpadAdd => Some(Shortcut::ZoomIn),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(Shortcut::ZoomOut),
        KeyCode::KeyT => Some(Shortcut::ToggleAlwaysOnTop),
        KeyCode::Comma => Some(Shortcut::OpenSettings),
        KeyCode::KeyQ => Some(Shortcut::Quit),
        _ => None,
    }
}

/// Window-local pointer position rounded down to whole pixels
pub fn to_point(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x.floor() as i32, position.y.floor() as i32)
}
