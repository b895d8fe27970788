//! Edge resize handling for the borderless window
//!
//! Hit testing, candidate geometry computation and validation are pure
//! functions of their inputs so the controller can be driven without a
//! display.

use crate::window::geometry::{Point, WindowGeometry, ASPECT_RATIO};
use winit::window::{CursorIcon, ResizeDirection};

/// Resize edge enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl ResizeEdge {
    /// Convert to cursor icon
    pub fn to_cursor_icon(&self) -> CursorIcon {
        match self {
            ResizeEdge::Top | ResizeEdge::Bottom => CursorIcon::NsResize,
            ResizeEdge::Left | ResizeEdge::Right => CursorIcon::EwResize,
            ResizeEdge::TopLeft | ResizeEdge::BottomRight => CursorIcon::NwseResize,
            ResizeEdge::TopRight | ResizeEdge::BottomLeft => CursorIcon::NeswResize,
        }
    }

    /// Direction for a compositor-driven resize from this handle
    pub fn to_resize_direction(&self) -> ResizeDirection {
        match self {
            ResizeEdge::Top => ResizeDirection::North,
            ResizeEdge::TopRight => ResizeDirection::NorthEast,
            ResizeEdge::Right => ResizeDirection::East,
            ResizeEdge::BottomRight => ResizeDirection::SouthEast,
            ResizeEdge::Bottom => ResizeDirection::South,
            ResizeEdge::BottomLeft => ResizeDirection::SouthWest,
            ResizeEdge::Left => ResizeDirection::West,
            ResizeEdge::TopLeft => ResizeDirection::NorthWest,
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            ResizeEdge::TopLeft
                | ResizeEdge::TopRight
                | ResizeEdge::BottomLeft
                | ResizeEdge::BottomRight
        )
    }

    /// Whether this handle drags the left side
    pub fn is_left(&self) -> bool {
        matches!(self, ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft)
    }

    /// Whether this handle drags the right side
    pub fn is_right(&self) -> bool {
        matches!(self, ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight)
    }

    /// Whether this handle drags the top side
    pub fn is_top(&self) -> bool {
        matches!(self, ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight)
    }

    /// Whether this handle drags the bottom side
    pub fn is_bottom(&self) -> bool {
        matches!(self, ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight)
    }
}

/// State captured when a resize gesture starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    /// Handle being dragged
    pub edge: ResizeEdge,

    /// Pointer position in screen coordinates at pointer-down
    pub anchor_pointer: Point,

    /// Window geometry at pointer-down
    pub anchor_geometry: WindowGeometry,
}

impl ResizeSession {
    pub fn new(edge: ResizeEdge, anchor_pointer: Point, anchor_geometry: WindowGeometry) -> Self {
        Self { edge, anchor_pointer, anchor_geometry }
    }

    /// Candidate geometry for the pointer at `pointer` (screen coordinates)
    pub fn candidate(&self, pointer: Point, maintain_aspect_ratio: bool) -> WindowGeometry {
        let (dx, dy) = pointer.delta_from(self.anchor_pointer);
        calculate_new_geometry(self.edge, &self.anchor_geometry, dx, dy, maintain_aspect_ratio)
    }
}

/// Classify which edge or corner of a `width` x `height` window the
/// window-local position `(x, y)` is on
///
/// A position is on a side when it is strictly within `border` pixels of it.
/// Corners win over single edges.
pub fn classify_edge(x: i32, y: i32, width: i32, height: i32, border: i32) -> Option<ResizeEdge> {
    let left = x < border;
    let right = x > width - border;
    let top = y < border;
    let bottom = y > height - border;

    match (left, right, top, bottom) {
        (true, _, true, _) => Some(ResizeEdge::TopLeft),
        (_, true, true, _) => Some(ResizeEdge::TopRight),
        (true, _, _, true) => Some(ResizeEdge::BottomLeft),
        (_, true, _, true) => Some(ResizeEdge::BottomRight),
        (true, _, _, _) => Some(ResizeEdge::Left),
        (_, true, _, _) => Some(ResizeEdge::Right),
        (_, _, true, _) => Some(ResizeEdge::Top),
        (_, _, _, true) => Some(ResizeEdge::Bottom),
        _ => None,
    }
}

/// Compute the geometry produced by dragging `edge` by `(dx, dy)` from `anchor`
///
/// Corners follow only the dominant axis of the displacement: horizontal when
/// `|dx| > |dy|`, vertical otherwise. The other axis keeps its anchor value.
pub fn calculate_new_geometry(
    edge: ResizeEdge,
    anchor: &WindowGeometry,
    dx: i32,
    dy: i32,
    maintain_aspect_ratio: bool,
) -> WindowGeometry {
    let mut geometry = *anchor;

    if edge.is_corner() {
        if dx.abs() > dy.abs() {
            if edge.is_left() {
                geometry.set_left(anchor.x + dx);
            } else {
                geometry.set_right(anchor.right() + dx);
            }
        } else if edge.is_top() {
            geometry.set_top(anchor.y + dy);
        } else {
            geometry.set_bottom(anchor.bottom() + dy);
        }
    } else {
        match edge {
            ResizeEdge::Left => geometry.set_left(anchor.x + dx),
            ResizeEdge::Right => geometry.set_right(anchor.right() + dx),
            ResizeEdge::Top => geometry.set_top(anchor.y + dy),
            ResizeEdge::Bottom => geometry.set_bottom(anchor.bottom() + dy),
            _ => unreachable!("corners handled above"),
        }
    }

    if maintain_aspect_ratio {
        geometry = maintain_aspect(edge, anchor, geometry);
    }

    geometry
}

/// Force `candidate` to [`ASPECT_RATIO`]
///
/// The dimension that moved less relative to `anchor` is derived from the
/// other one. The derived side is the one under the active handle, so the
/// opposite corner stays put.
pub fn maintain_aspect(
    edge: ResizeEdge,
    anchor: &WindowGeometry,
    candidate: WindowGeometry,
) -> WindowGeometry {
    let mut geometry = candidate;
    let width_change = (candidate.width - anchor.width).abs();
    let height_change = (candidate.height - anchor.height).abs();

    if width_change > height_change {
        let target_height = (f64::from(candidate.width) / ASPECT_RATIO) as i32;
        if edge.is_top() {
            geometry.set_top(geometry.bottom() - target_height);
        } else {
            geometry.set_bottom(geometry.y + target_height);
        }
    } else {
        let target_width = (f64::from(candidate.height) * ASPECT_RATIO) as i32;
        if edge.is_left() {
            geometry.set_left(geometry.right() - target_width);
        } else {
            geometry.set_right(geometry.x + target_width);
        }
    }

    geometry
}

/// Whether a candidate may be applied: within the size limits and entirely
/// on `display`. Out-of-bounds candidates are rejected, never clamped.
pub fn is_valid_geometry(geometry: &WindowGeometry, display: &WindowGeometry) -> bool {
    geometry.within_size_limits() && display.contains(geometry)
}
