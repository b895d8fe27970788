//! Integration tests for interactive resize and drag
//!
//! These tests verify:
//! - The right-edge resize scenario end to end
//! - Rejection of candidates outside the size limits or the display
//! - Aspect-ratio mode
//! - Dragging by the top strip

use scwidget::widget::HostAction;
use scwidget::window::{CursorIcon, GestureState, InputEvent, Point, WindowGeometry};
use scwidget_integration_tests::{applied_geometries, gesture, widget_at, DISPLAY};

const START: WindowGeometry = WindowGeometry::new(100, 100, 1024, 576);

#[test]
fn test_right_edge_drag_grows_width() {
    let (mut widget, _) = widget_at(START);

    let actions = gesture(&mut widget, Point::new(1020, 300), &[Point::new(1070, 300)]);

    assert_eq!(applied_geometries(&actions), vec![WindowGeometry::new(100, 100, 1074, 576)]);
    assert_eq!(widget.geometry(), WindowGeometry::new(100, 100, 1074, 576));
    assert_eq!(widget.controller().state(), GestureState::Idle);
    assert_eq!(actions.last(), Some(&HostAction::SetCursor(CursorIcon::Default)));
    assert_eq!(
        widget.content().last_bounds(),
        Some(WindowGeometry::new(8, 28, 1058, 540))
    );
}

#[test]
fn test_shrinking_below_minimum_is_ignored() {
    let (mut widget, _) = widget_at(START);

    // Bottom edge pulled up 400px would leave 176px of height
    let actions = gesture(&mut widget, Point::new(500, 572), &[Point::new(500, 172)]);

    assert!(applied_geometries(&actions).is_empty());
    assert_eq!(widget.geometry(), START);
}

#[test]
fn test_growing_beyond_maximum_is_ignored() {
    let (mut widget, _) = widget_at(WindowGeometry::new(0, 0, 1900, 576));

    let actions = gesture(&mut widget, Point::new(1898, 300), &[Point::new(1928, 300)]);

    assert!(applied_geometries(&actions).is_empty());
    assert_eq!(widget.geometry(), WindowGeometry::new(0, 0, 1900, 576));
}

#[test]
fn test_leaving_the_display_is_ignored() {
    let (mut widget, _) = widget_at(START);

    // Top edge dragged 150px up would put the window at y = -50
    let actions = gesture(&mut widget, Point::new(500, 3), &[Point::new(500, -147)]);

    assert!(applied_geometries(&actions).is_empty());
    assert_eq!(widget.geometry(), START);
}

#[test]
fn test_invalid_step_keeps_last_valid_geometry() {
    let (mut widget, _) = widget_at(START);

    let actions = gesture(
        &mut widget,
        Point::new(1020, 300),
        &[Point::new(1070, 300), Point::new(2000, 300), Point::new(1090, 300)],
    );

    assert_eq!(
        applied_geometries(&actions),
        vec![
            WindowGeometry::new(100, 100, 1074, 576),
            WindowGeometry::new(100, 100, 1094, 576),
        ]
    );
}

#[test]
fn test_corner_resize_is_single_axis() {
    let (mut widget, _) = widget_at(START);

    gesture(&mut widget, Point::new(1020, 572), &[Point::new(1100, 592)]);

    assert_eq!(widget.geometry(), WindowGeometry::new(100, 100, 1104, 576));
}

#[test]
fn test_aspect_mode_holds_sixteen_by_nine() {
    let (mut widget, _) = widget_at(WindowGeometry::new(100, 100, 800, 600));
    widget.handle_input(InputEvent::AspectModifier(true));

    gesture(&mut widget, Point::new(798, 300), &[Point::new(998, 300)]);

    // 1000 / (16 / 9) = 562.5, truncated; the top edge stays put
    assert_eq!(widget.geometry(), WindowGeometry::new(100, 100, 1000, 562));

    widget.handle_input(InputEvent::AspectModifier(false));
    assert!(!widget.controller().maintain_aspect_ratio());
}

#[test]
fn test_drag_strip_moves_window_anywhere() {
    let (mut widget, _) = widget_at(START);

    let actions = gesture(&mut widget, Point::new(400, 12), &[Point::new(-600, 12)]);

    assert_eq!(applied_geometries(&actions), vec![WindowGeometry::new(-900, 100, 1024, 576)]);
}

#[test]
fn test_left_edge_tracks_reported_window_origin() {
    let (mut widget, _) = widget_at(START);

    widget.handle_input(InputEvent::PointerPressed(Point::new(2, 300)));
    let actions = widget.handle_input(InputEvent::PointerMoved(Point::new(-48, 300)));
    assert_eq!(applied_geometries(&actions), vec![WindowGeometry::new(50, 100, 1074, 576)]);

    // Another event before the move lands: same screen point, no change
    let actions = widget.handle_input(InputEvent::PointerMoved(Point::new(-48, 300)));
    assert!(applied_geometries(&actions).is_empty());

    // The move lands; the pointer has not moved on screen
    widget.handle_input(InputEvent::Moved(Point::new(50, 100)));
    let actions = widget.handle_input(InputEvent::PointerMoved(Point::new(2, 300)));
    assert!(applied_geometries(&actions).is_empty());

    widget.handle_input(InputEvent::PointerReleased);
    assert_eq!(widget.geometry(), WindowGeometry::new(50, 100, 1074, 576));
}

#[test]
fn test_crate_root_reexports_window_types() {
    let geometry: scwidget::WindowGeometry = scwidget::window::WindowGeometry::new(1, 2, 300, 200);
    let controller = scwidget::FramelessController::new(geometry, DISPLAY);
    assert_eq!(controller.geometry(), geometry);
    assert_eq!(scwidget::WindowLayer::default(), scwidget::WindowLayer::Normal);
}

#[test]
fn test_hover_updates_cursor_only() {
    let (mut widget, _) = widget_at(START);

    let actions = widget.handle_input(InputEvent::PointerMoved(Point::new(2, 2)));
    assert_eq!(actions, vec![HostAction::SetCursor(CursorIcon::NwseResize)]);

    let actions = widget.handle_input(InputEvent::PointerMoved(Point::new(1022, 2)));
    assert_eq!(actions, vec![HostAction::SetCursor(CursorIcon::NeswResize)]);

    assert_eq!(widget.geometry(), START);
}

#[test]
fn test_focus_loss_ends_gesture() {
    let (mut widget, _) = widget_at(START);

    widget.handle_input(InputEvent::PointerPressed(Point::new(1020, 300)));
    assert!(widget.controller().is_resizing());

    widget.handle_input(InputEvent::FocusLost);
    assert!(!widget.controller().is_resizing());

    let actions = widget.handle_input(InputEvent::PointerMoved(Point::new(1070, 300)));
    assert!(applied_geometries(&actions).is_empty());
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use scwidget::window::resize::is_valid_geometry;

    proptest! {
        #[test]
        fn applied_geometry_is_always_valid(
            press in (0i32..1024, 0i32..576),
            moves in prop::collection::vec((-2000i32..3000, -2000i32..2000), 1..12),
            aspect in any::<bool>(),
        ) {
            let (mut widget, _) = widget_at(START);
            widget.handle_input(InputEvent::AspectModifier(aspect));

            let path: Vec<Point> = moves.into_iter().map(|(x, y)| Point::new(x, y)).collect();
            let actions = gesture(&mut widget, Point::new(press.0, press.1), &path);

            let resized = applied_geometries(&actions)
                .into_iter()
                .filter(|g| (g.width, g.height) != (START.width, START.height));
            for geometry in resized {
                prop_assert!(is_valid_geometry(&geometry, &DISPLAY), "{:?}", geometry);
            }
            prop_assert_eq!(widget.controller().state(), GestureState::Idle);
        }
    }
}
