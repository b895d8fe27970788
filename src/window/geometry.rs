//! Integer pixel rectangles and the size limits of the overlay window

use serde::{Deserialize, Serialize};

/// Thickness of the resize band along every window edge
pub const BORDER_WIDTH: i32 = 8;

/// Smallest size a resize may produce
pub const MIN_SIZE: Size = Size { width: 300, height: 200 };

/// Largest size a resize may produce
pub const MAX_SIZE: Size = Size { width: 1920, height: 1080 };

/// Size of a window that has no persisted geometry
pub const DEFAULT_SIZE: Size = Size { width: 1024, height: 576 };

/// Width-to-height ratio enforced while the aspect modifier is held
pub const ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// A point in pixels, either window-local or in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`
    pub fn delta_from(self, origin: Point) -> (i32, i32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Window rectangle in screen pixels
///
/// `right()` and `bottom()` are exclusive, so a rectangle at `x` with
/// `width` covers columns `x..x + width`. Width and height may go negative
/// while a candidate is being computed; validation rejects those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self::new(0, 0, DEFAULT_SIZE.width, DEFAULT_SIZE.height)
    }
}

impl WindowGeometry {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Move the left side, keeping the right side in place
    pub fn set_left(&mut self, left: i32) {
        let right = self.right();
        self.x = left;
        self.width = right - left;
    }

    /// Move the right side, keeping the left side in place
    pub fn set_right(&mut self, right: i32) {
        self.width = right - self.x;
    }

    /// Move the top side, keeping the bottom side in place
    pub fn set_top(&mut self, top: i32) {
        let bottom = self.bottom();
        self.y = top;
        self.height = bottom - top;
    }

    /// Move the bottom side, keeping the top side in place
    pub fn set_bottom(&mut self, bottom: i32) {
        self.height = bottom - self.y;
    }

    /// Same size, new top-left corner
    pub fn moved_to(&self, origin: Point) -> Self {
        Self::new(origin.x, origin.y, self.width, self.height)
    }

    /// Whether `other` lies entirely inside `self`
    pub fn contains(&self, other: &WindowGeometry) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether a point lies inside the rectangle
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Rectangle shrunk by `inset` on every side
    pub fn inset(&self, inset: i32) -> Self {
        Self::new(
            self.x + inset,
            self.y + inset,
            (self.width - 2 * inset).max(0),
            (self.height - 2 * inset).max(0),
        )
    }

    /// Whether width and height are within `MIN_SIZE..=MAX_SIZE`
    pub fn within_size_limits(&self) -> bool {
        self.width >= MIN_SIZE.width
            && self.height >= MIN_SIZE.height
            && self.width <= MAX_SIZE.width
            && self.height <= MAX_SIZE.height
    }
}
