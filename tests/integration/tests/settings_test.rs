//! Integration tests for settings load, save and apply

use anyhow::Result;
use scwidget::content::ContentView;
use scwidget::settings::{DisplaySettings, MemorySettingsStore, SettingsStore};
use scwidget::widget::HostAction;
use scwidget::window::{InputEvent, Point, Shortcut, WindowGeometry, WindowLayer};
use scwidget_integration_tests::{gesture, widget_at, widget_with, SettingsFixture};

#[test]
fn test_first_run_uses_defaults() -> Result<()> {
    let fixture = SettingsFixture::new()?;
    let mut widget = widget_with(fixture.store());

    let actions = widget.load_settings();

    assert_eq!(widget.content().zoom_factor(), 1.0);
    assert!(!widget.always_on_top());
    assert_eq!(widget.geometry(), WindowGeometry::new(0, 0, 1024, 576));
    assert!(actions.contains(&HostAction::SetGeometry(WindowGeometry::new(0, 0, 1024, 576))));
    assert!(!fixture.path().exists());
    Ok(())
}

#[test]
fn test_session_round_trip_through_file() -> Result<()> {
    let fixture = SettingsFixture::new()?;

    let mut first = widget_with(fixture.store());
    first.load_settings();
    first.controller_mut().restore_geometry(WindowGeometry::new(100, 100, 1024, 576));
    gesture(&mut first, Point::new(1020, 300), &[Point::new(1070, 300)]);
    let mut form = first.show_settings();
    form.set_zoom_percent(150);
    form.always_on_top = true;
    first.accept_settings(form);
    first.handle_input(InputEvent::CloseRequested);

    let mut second = widget_with(fixture.store());
    let actions = second.load_settings();

    assert_eq!(second.content().zoom_factor(), 1.5);
    assert!(second.always_on_top());
    assert_eq!(second.geometry(), WindowGeometry::new(100, 100, 1074, 576));
    assert!(actions.contains(&HostAction::SetLayer(WindowLayer::AlwaysOnTop)));
    assert_eq!(second.content().zoom_history, vec![1.5]);
    Ok(())
}

#[test]
fn test_zoom_spin_150_is_applied_and_persisted() {
    let (mut widget, store) = widget_at(WindowGeometry::new(100, 100, 1024, 576));

    let mut form = widget.show_settings();
    assert_eq!(form.zoom_percent, 100);
    form.set_zoom_percent(150);
    widget.accept_settings(form);

    assert_eq!(widget.content().zoom_factor(), 1.5);
    assert_eq!(store.saved().map(|s| s.zoom_factor), Some(1.5));
}

#[test]
fn test_settings_form_reflects_live_state() {
    let store = MemorySettingsStore::with_settings(DisplaySettings {
        zoom_factor: 0.75,
        always_on_top: true,
        geometry: WindowGeometry::new(0, 0, 640, 360),
    });
    let mut widget = widget_with(store);
    widget.load_settings();

    let form = widget.show_settings();
    assert_eq!(form.zoom_percent, 75);
    assert!(form.always_on_top);
}

#[test]
fn test_unreadable_file_falls_back_to_defaults() -> Result<()> {
    let fixture = SettingsFixture::new()?;
    std::fs::create_dir_all(fixture.path().parent().unwrap())?;
    std::fs::write(fixture.path(), "geometry = 12\nzoom_factor = -3.0\n")?;

    assert_eq!(fixture.store().load(), DisplaySettings::default());
    Ok(())
}

#[test]
fn test_shortcut_changes_are_persisted() {
    let (mut widget, store) = widget_at(WindowGeometry::new(0, 0, 1024, 576));

    widget.handle_input(InputEvent::Shortcut(Shortcut::ZoomIn));
    widget.handle_input(InputEvent::Shortcut(Shortcut::ToggleAlwaysOnTop));

    let saved = store.saved().unwrap();
    assert_eq!(saved.zoom_factor, 1.25);
    assert!(saved.always_on_top);
}

#[test]
fn test_quit_saves_before_exit() {
    let (mut widget, store) = widget_at(WindowGeometry::new(30, 40, 800, 450));

    let actions = widget.handle_input(InputEvent::Shortcut(Shortcut::Quit));

    assert_eq!(actions, vec![HostAction::Exit]);
    assert_eq!(store.saved().unwrap().geometry, WindowGeometry::new(30, 40, 800, 450));
}
