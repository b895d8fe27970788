//! The overlay widget
//!
//! Composes the frameless controller with the content view, the settings
//! store and the window chrome. Input goes in as [`InputEvent`]s; what the
//! toolkit has to do comes back as [`HostAction`]s, so the whole widget runs
//! without a display in tests.

use crate::content::ContentView;
use crate::settings::{DisplaySettings, SettingsForm, SettingsStore};
use crate::utils::error::Result;
use crate::window::controller::{ControllerUpdate, FramelessController, NativeGesture};
use crate::window::events::{InputEvent, Shortcut};
use crate::window::geometry::WindowGeometry;
use crate::window::{WindowChrome, WindowLayer};
use log::{error, info};
use winit::window::CursorIcon;

/// Something the host toolkit has to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Move and resize the window
    SetGeometry(WindowGeometry),

    /// Change the cursor glyph
    SetCursor(CursorIcon),

    /// Change the stacking layer
    SetLayer(WindowLayer),

    /// Repaint the frame
    Redraw,

    /// Let the window system run a move or resize with the button held
    BeginNativeGesture(NativeGesture),

    /// Present the settings surface pre-filled with this form
    OpenSettings(SettingsForm),

    /// Leave the event loop
    Exit,
}

/// Borderless overlay showing one embedded page
pub struct Widget<S: SettingsStore, V: ContentView> {
    controller: FramelessController,
    content: V,
    store: S,
    chrome: WindowChrome,
}

impl<S: SettingsStore, V: ContentView> Widget<S, V> {
    /// Create a widget at the default geometry on a display covering `display`
    pub fn new(store: S, content: V, chrome: WindowChrome, display: WindowGeometry) -> Self {
        let mut widget = Self {
            controller: FramelessController::new(WindowGeometry::default(), display),
            content,
            store,
            chrome,
        };
        let bounds = widget.controller.content_bounds();
        widget.content.set_bounds(bounds);
        widget
    }

    pub fn controller(&self) -> &FramelessController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FramelessController {
        &mut self.controller
    }

    pub fn content(&self) -> &V {
        &self.content
    }

    /// Swap in a different content view (the web view exists only once the
    /// window does)
    pub fn attach_content(&mut self, mut content: V) {
        content.set_zoom_factor(self.content.zoom_factor());
        content.set_bounds(self.controller.content_bounds());
        self.content = content;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn chrome(&self) -> &WindowChrome {
        &self.chrome
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.controller.geometry()
    }

    pub fn always_on_top(&self) -> bool {
        self.chrome.layer.is_always_on_top()
    }

    /// Current values of the persisted state
    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            zoom_factor: self.content.zoom_factor(),
            always_on_top: self.always_on_top(),
            geometry: self.controller.geometry(),
        }
    }

    /// Read persisted settings and apply them to the live state
    pub fn load_settings(&mut self) -> Vec<HostAction> {
        let settings = self.store.load();
        info!(
            "Restoring zoom {:.0}%, always on top {}, geometry {:?}",
            settings.zoom_factor * 100.0,
            settings.always_on_top,
            settings.geometry
        );

        self.content.set_zoom_factor(settings.zoom_factor);
        self.chrome.layer = WindowLayer::from_always_on_top(settings.always_on_top);
        self.controller.restore_geometry(settings.geometry);
        self.content.set_bounds(self.controller.content_bounds());

        vec![
            HostAction::SetLayer(self.chrome.layer),
            HostAction::SetGeometry(settings.geometry),
            HostAction::Redraw,
        ]
    }

    /// Write the current zoom, always-on-top flag and geometry
    pub fn save_settings(&self) -> Result<()> {
        self.store.save(&self.display_settings())
    }

    /// Form for the settings surface, pre-filled from live state
    pub fn show_settings(&self) -> SettingsForm {
        SettingsForm::from_current(self.content.zoom_factor(), self.always_on_top())
    }

    /// Apply an accepted settings form and persist the result
    pub fn accept_settings(&mut self, form: SettingsForm) -> Vec<HostAction> {
        let zoom_factor = form.zoom_factor();
        info!("Applying zoom {:.0}%, always on top {}", zoom_factor * 100.0, form.always_on_top);

        self.content.set_zoom_factor(zoom_factor);
        self.chrome.layer = WindowLayer::from_always_on_top(form.always_on_top);
        self.persist();

        vec![HostAction::SetLayer(self.chrome.layer)]
    }

    /// Save on the way out; a failed save does not block closing
    pub fn close(&mut self) -> Vec<HostAction> {
        self.controller.cancel_gesture();
        self.persist();
        vec![HostAction::Exit]
    }

    /// React to one input event
    pub fn handle_input(&mut self, event: InputEvent) -> Vec<HostAction> {
        match event {
            InputEvent::PointerPressed(local) => {
                let update = self.controller.pointer_pressed(local);
                self.apply_update(update)
            }
            InputEvent::PointerMoved(local) => {
                let update = self.controller.pointer_moved(local);
                self.apply_update(update)
            }
            InputEvent::PointerReleased => {
                let update = self.controller.pointer_released();
                self.apply_update(update)
            }
            InputEvent::PointerLeft => {
                let update = self.controller.pointer_left();
                self.apply_update(update)
            }
            InputEvent::FocusLost => {
                self.controller.set_maintain_aspect_ratio(false);
                let update = self.controller.cancel_gesture();
                self.apply_update(update)
            }
            InputEvent::AspectModifier(held) => {
                self.controller.set_maintain_aspect_ratio(held);
                Vec::new()
            }
            InputEvent::Moved(origin) => {
                self.controller.window_moved(origin);
                Vec::new()
            }
            InputEvent::Resized(size) => {
                let current = self.controller.geometry();
                if (current.width, current.height) == (size.width, size.height) {
                    return vec![HostAction::Redraw];
                }
                let resized = WindowGeometry::new(current.x, current.y, size.width, size.height);
                self.controller.sync_geometry(resized);
                self.content.set_bounds(self.controller.content_bounds());
                vec![HostAction::Redraw]
            }
            InputEvent::Shortcut(shortcut) => self.handle_shortcut(shortcut),
            InputEvent::CloseRequested => self.close(),
        }
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut) -> Vec<HostAction> {
        match shortcut {
            Shortcut::ZoomIn | Shortcut::ZoomOut => {
                let mut form = self.show_settings();
                form.step_zoom(if shortcut == Shortcut::ZoomIn { 1 } else { -1 });
                self.accept_settings(form)
            }
            Shortcut::ToggleAlwaysOnTop => {
                let mut form = self.show_settings();
                form.always_on_top = !form.always_on_top;
                self.accept_settings(form)
            }
            Shortcut::OpenSettings => vec![HostAction::OpenSettings(self.show_settings())],
            Shortcut::Quit => self.close(),
        }
    }

    fn apply_update(&mut self, update: ControllerUpdate) -> Vec<HostAction> {
        let mut actions = Vec::new();

        if let Some(geometry) = update.geometry {
            self.content.set_bounds(self.controller.content_bounds());
            actions.push(HostAction::SetGeometry(geometry));
            actions.push(HostAction::Redraw);
        }
        if let Some(cursor) = update.cursor {
            actions.push(HostAction::SetCursor(cursor));
        }
        if let Some(gesture) = update.native {
            actions.push(HostAction::BeginNativeGesture(gesture));
        }

        actions
    }

    fn persist(&self) {
        if let Err(e) = self.save_settings() {
            error!("Failed to save display settings: {}", e);
        }
    }
}
