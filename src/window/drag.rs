//! Drag strip window movement
//!
//! A fixed-height strip along the top inner edge moves the borderless
//! window. Dragging is never validated, so the window may leave the screen.

use crate::window::geometry::{Point, WindowGeometry};

/// Height of the drag strip in pixels
pub const DRAG_STRIP_HEIGHT: i32 = 20;

/// Window-local rectangle of the drag strip for a window `width` wide
///
/// The strip spans the top inner edge between the resize borders.
pub fn drag_strip_rect(width: i32, border: i32) -> WindowGeometry {
    WindowGeometry::new(border, border, (width - 2 * border).max(0), DRAG_STRIP_HEIGHT)
}

/// State captured when a drag gesture starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Pointer position in screen coordinates at pointer-down
    pub anchor_pointer: Point,

    /// Window origin at pointer-down
    pub anchor_origin: Point,
}

impl DragSession {
    pub fn new(anchor_pointer: Point, anchor_origin: Point) -> Self {
        Self { anchor_pointer, anchor_origin }
    }

    /// Window origin for the pointer at `pointer` (screen coordinates)
    pub fn origin_for(&self, pointer: Point) -> Point {
        let (dx, dy) = pointer.delta_from(self.anchor_pointer);
        Point::new(self.anchor_origin.x + dx, self.anchor_origin.y + dy)
    }
}
