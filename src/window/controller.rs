//! Frameless window controller
//!
//! Owns the window geometry and the gesture state machine. The host feeds
//! it window-local pointer positions and applies whatever [`ControllerUpdate`]
//! comes back; nothing in here touches the toolkit.

use crate::window::drag::{drag_strip_rect, DragSession, DRAG_STRIP_HEIGHT};
use crate::window::geometry::{Point, WindowGeometry, BORDER_WIDTH};
use crate::window::resize::{classify_edge, is_valid_geometry, ResizeEdge, ResizeSession};
use log::{debug, trace};
use winit::window::CursorIcon;

/// Gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// No button held
    Idle,

    /// A border or corner is being dragged
    Resizing(ResizeSession),

    /// The drag strip is being dragged
    Dragging(DragSession),
}

/// Part of the window under a window-local position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRegion {
    Edge(ResizeEdge),
    DragStrip,
    Content,
}

impl PointerRegion {
    pub fn cursor(&self) -> CursorIcon {
        match self {
            PointerRegion::Edge(edge) => edge.to_cursor_icon(),
            PointerRegion::DragStrip => CursorIcon::Move,
            PointerRegion::Content => CursorIcon::Default,
        }
    }
}

/// Gesture handed to the window system when it will not let the window be
/// positioned from here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeGesture {
    Move,
    Resize(ResizeEdge),
}

/// What the host has to apply after an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerUpdate {
    /// New window rectangle in screen coordinates
    pub geometry: Option<WindowGeometry>,

    /// New cursor glyph
    pub cursor: Option<CursorIcon>,

    /// Gesture the window system should run instead
    pub native: Option<NativeGesture>,
}

impl ControllerUpdate {
    pub fn is_empty(&self) -> bool {
        self.geometry.is_none() && self.cursor.is_none() && self.native.is_none()
    }
}

/// Geometry and interactive resize/drag state of the borderless window
#[derive(Debug, Clone)]
pub struct FramelessController {
    geometry: WindowGeometry,

    /// Origin the window system last reported; pointer positions are
    /// relative to it, whatever has been requested since
    window_origin: Point,

    display: WindowGeometry,
    state: GestureState,
    maintain_aspect_ratio: bool,
    native_gestures: bool,
    cursor: CursorIcon,
}

impl FramelessController {
    /// Create a controller for a window at `geometry` on a primary display
    /// covering `display`
    pub fn new(geometry: WindowGeometry, display: WindowGeometry) -> Self {
        Self {
            geometry,
            window_origin: geometry.origin(),
            display,
            state: GestureState::Idle,
            maintain_aspect_ratio: false,
            native_gestures: false,
            cursor: CursorIcon::Default,
        }
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.state, GestureState::Resizing(_))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    pub fn maintain_aspect_ratio(&self) -> bool {
        self.maintain_aspect_ratio
    }

    /// Toggle aspect-ratio mode (held modifier)
    pub fn set_maintain_aspect_ratio(&mut self, enabled: bool) {
        self.maintain_aspect_ratio = enabled;
    }

    /// Replace the primary display rectangle used for validation
    pub fn set_display(&mut self, display: WindowGeometry) {
        self.display = display;
    }

    /// Hand drag and resize gestures to the window system (platforms where
    /// the window cannot be positioned by the application)
    pub fn set_native_gestures(&mut self, enabled: bool) {
        self.native_gestures = enabled;
    }

    /// Replace the geometry without validation (restoring persisted state)
    pub fn restore_geometry(&mut self, geometry: WindowGeometry) {
        self.geometry = geometry;
        self.window_origin = geometry.origin();
    }

    /// Record a size the window system reports (external resizes)
    pub fn sync_geometry(&mut self, geometry: WindowGeometry) {
        if matches!(self.state, GestureState::Idle) {
            self.geometry = geometry;
        }
    }

    /// Record a move the window system reports
    ///
    /// The origin always becomes the reference for pointer positions. The
    /// geometry only follows outside a gesture, where nothing is pending.
    pub fn window_moved(&mut self, origin: Point) {
        self.window_origin = origin;
        if matches!(self.state, GestureState::Idle) {
            self.geometry = self.geometry.moved_to(origin);
        }
    }

    /// Window-local rectangle of the drag strip
    pub fn drag_strip(&self) -> WindowGeometry {
        drag_strip_rect(self.geometry.width, BORDER_WIDTH)
    }

    /// Window-local rectangle left for the embedded content view
    pub fn content_bounds(&self) -> WindowGeometry {
        let inner = WindowGeometry::new(0, 0, self.geometry.width, self.geometry.height)
            .inset(BORDER_WIDTH);
        WindowGeometry::new(
            inner.x,
            inner.y + DRAG_STRIP_HEIGHT,
            inner.width,
            (inner.height - DRAG_STRIP_HEIGHT).max(0),
        )
    }

    /// Classify a window-local position against the current size
    pub fn hit_test(&self, local: Point) -> PointerRegion {
        let (width, height) = (self.geometry.width, self.geometry.height);
        if let Some(edge) = classify_edge(local.x, local.y, width, height, BORDER_WIDTH) {
            PointerRegion::Edge(edge)
        } else if self.drag_strip().contains_point(local) {
            PointerRegion::DragStrip
        } else {
            PointerRegion::Content
        }
    }

    /// Left button pressed at a window-local position
    pub fn pointer_pressed(&mut self, local: Point) -> ControllerUpdate {
        if !matches!(self.state, GestureState::Idle) {
            return ControllerUpdate::default();
        }

        let region = self.hit_test(local);
        if self.native_gestures {
            let native = match region {
                PointerRegion::Edge(edge) => NativeGesture::Resize(edge),
                PointerRegion::DragStrip => NativeGesture::Move,
                PointerRegion::Content => return ControllerUpdate::default(),
            };
            debug!("Handing {:?} to the window system", native);
            return ControllerUpdate { native: Some(native), ..ControllerUpdate::default() };
        }

        let pointer = self.to_screen(local);
        match region {
            PointerRegion::Edge(edge) => {
                debug!("Resize started from {:?} at {:?}", edge, self.geometry);
                self.state =
                    GestureState::Resizing(ResizeSession::new(edge, pointer, self.geometry));
                self.set_cursor(edge.to_cursor_icon())
            }
            PointerRegion::DragStrip => {
                debug!("Drag started at {:?}", self.geometry.origin());
                self.state =
                    GestureState::Dragging(DragSession::new(pointer, self.geometry.origin()));
                self.set_cursor(CursorIcon::Move)
            }
            PointerRegion::Content => ControllerUpdate::default(),
        }
    }

    /// Pointer moved to a window-local position
    pub fn pointer_moved(&mut self, local: Point) -> ControllerUpdate {
        match self.state {
            GestureState::Idle => {
                let cursor = self.hit_test(local).cursor();
                self.set_cursor(cursor)
            }
            GestureState::Resizing(session) => {
                let candidate =
                    session.candidate(self.to_screen(local), self.maintain_aspect_ratio);
                if candidate == self.geometry {
                    return ControllerUpdate::default();
                }
                if !is_valid_geometry(&candidate, &self.display) {
                    trace!("Rejected resize candidate {:?}", candidate);
                    return ControllerUpdate::default();
                }
                self.geometry = candidate;
                ControllerUpdate { geometry: Some(candidate), ..ControllerUpdate::default() }
            }
            GestureState::Dragging(session) => {
                let origin = session.origin_for(self.to_screen(local));
                if origin == self.geometry.origin() {
                    return ControllerUpdate::default();
                }
                self.geometry = self.geometry.moved_to(origin);
                ControllerUpdate { geometry: Some(self.geometry), ..ControllerUpdate::default() }
            }
        }
    }

    /// Left button released
    pub fn pointer_released(&mut self) -> ControllerUpdate {
        match std::mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Resizing(_) => {
                debug!("Resize finished at {:?}", self.geometry);
                self.set_cursor(CursorIcon::Default)
            }
            GestureState::Dragging(_) => {
                debug!("Drag finished at {:?}", self.geometry.origin());
                ControllerUpdate::default()
            }
            GestureState::Idle => ControllerUpdate::default(),
        }
    }

    /// Abandon any gesture (focus lost, pointer-up will never arrive)
    pub fn cancel_gesture(&mut self) -> ControllerUpdate {
        if matches!(self.state, GestureState::Idle) {
            return ControllerUpdate::default();
        }
        self.state = GestureState::Idle;
        self.set_cursor(CursorIcon::Default)
    }

    /// Pointer left the window
    pub fn pointer_left(&mut self) -> ControllerUpdate {
        if matches!(self.state, GestureState::Idle) {
            self.set_cursor(CursorIcon::Default)
        } else {
            ControllerUpdate::default()
        }
    }

    fn to_screen(&self, local: Point) -> Point {
        Point::new(self.window_origin.x + local.x, self.window_origin.y + local.y)
    }

    fn set_cursor(&mut self, cursor: CursorIcon) -> ControllerUpdate {
        if self.cursor == cursor {
            return ControllerUpdate::default();
        }
        self.cursor = cursor;
        ControllerUpdate { cursor: Some(cursor), ..ControllerUpdate::default() }
    }
}
