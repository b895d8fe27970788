//! Integration test utilities for scwidget
//!
//! - A content view that records what the widget did to it
//! - Widget fixtures over in-memory and file-backed settings stores
//! - Pointer gesture helpers

use scwidget::content::ContentView;
use scwidget::settings::{MemorySettingsStore, SettingsStore, TomlSettingsStore};
use scwidget::widget::{HostAction, Widget};
use scwidget::window::{InputEvent, Point, WindowChrome, WindowGeometry};
use std::path::PathBuf;
use tempfile::TempDir;

/// Primary display used by every fixture
pub const DISPLAY: WindowGeometry = WindowGeometry::new(0, 0, 1920, 1080);

/// Content view that keeps a history of zoom and bounds changes
#[derive(Debug, Default, Clone)]
pub struct RecordingContentView {
    pub zoom_factor: f64,
    pub zoom_history: Vec<f64>,
    pub bounds_history: Vec<WindowGeometry>,
}

impl RecordingContentView {
    pub fn new() -> Self {
        Self { zoom_factor: 1.0, ..Self::default() }
    }

    pub fn last_bounds(&self) -> Option<WindowGeometry> {
        self.bounds_history.last().copied()
    }
}

impl ContentView for RecordingContentView {
    fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    fn set_zoom_factor(&mut self, zoom_factor: f64) {
        self.zoom_factor = zoom_factor;
        self.zoom_history.push(zoom_factor);
    }

    fn set_bounds(&mut self, bounds: WindowGeometry) {
        self.bounds_history.push(bounds);
    }
}

pub type TestWidget<S> = Widget<S, RecordingContentView>;

/// Widget over `store` with a recording content view
pub fn widget_with<S: SettingsStore>(store: S) -> TestWidget<S> {
    let chrome = WindowChrome::overlay("STALCRAFT Widget");
    Widget::new(store, RecordingContentView::new(), chrome, DISPLAY)
}

/// Widget over a fresh in-memory store, placed at `geometry`
pub fn widget_at(
    geometry: WindowGeometry,
) -> (TestWidget<MemorySettingsStore>, MemorySettingsStore) {
    let store = MemorySettingsStore::new();
    let mut widget = widget_with(store.clone());
    widget.controller_mut().restore_geometry(geometry);
    (widget, store)
}

/// Temporary directory holding a settings file
pub struct SettingsFixture {
    pub temp_dir: TempDir,
}

impl SettingsFixture {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self { temp_dir: TempDir::new()? })
    }

    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().join("stalcraft.widgets").join("widget.toml")
    }

    pub fn store(&self) -> TomlSettingsStore {
        TomlSettingsStore::new(self.path())
    }
}

/// Press at `from`, move through `path`, release; returns every action
pub fn gesture<S: SettingsStore>(
    widget: &mut TestWidget<S>,
    from: Point,
    path: &[Point],
) -> Vec<HostAction> {
    let mut actions = widget.handle_input(InputEvent::PointerPressed(from));
    for &point in path {
        actions.extend(widget.handle_input(InputEvent::PointerMoved(point)));
    }
    actions.extend(widget.handle_input(InputEvent::PointerReleased));
    actions
}

/// Geometries the host was asked to apply, in order
pub fn applied_geometries(actions: &[HostAction]) -> Vec<WindowGeometry> {
    actions
        .iter()
        .filter_map(|action| match action {
            HostAction::SetGeometry(geometry) => Some(*geometry),
            _ => None,
        })
        .collect()
}
