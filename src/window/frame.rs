//! Software painting of the window frame
//!
//! The embedded page covers the content area; the resize border and drag
//! strip around it are painted here into a softbuffer pixel buffer
//! (`0x00RRGGBB` per pixel, row-major).

use crate::window::caption::Caption;
use crate::window::geometry::{WindowGeometry, BORDER_WIDTH};

/// Fill outside the content area
pub const BACKGROUND: u32 = 0x0014_1414;

/// Outline drawn through the middle of the resize border
pub const OUTLINE: u32 = 0x00FF_FFFF;

/// Drag strip fill
pub const DRAG_STRIP: u32 = 0x0026_2626;

/// Outline thickness
const OUTLINE_WIDTH: i32 = 2;

/// Paint the frame of a `width` x `height` window into `buffer`, with the
/// caption (if any) centred in the drag strip
pub fn paint_frame(
    buffer: &mut [u32],
    width: u32,
    height: u32,
    drag_strip: &WindowGeometry,
    caption: Option<&Caption>,
) {
    let (w, h) = (width as i32, height as i32);
    if buffer.len() < (width as usize) * (height as usize) {
        return;
    }

    buffer.fill(BACKGROUND);
    fill_rect(buffer, w, h, drag_strip, DRAG_STRIP);

    // Outline centred in the border band
    let inset = BORDER_WIDTH / 2 - OUTLINE_WIDTH / 2;
    let outer = WindowGeometry::new(0, 0, w, h).inset(inset);
    let sides = [
        WindowGeometry::new(outer.x, outer.y, outer.width, OUTLINE_WIDTH),
        WindowGeometry::new(outer.x, outer.bottom() - OUTLINE_WIDTH, outer.width, OUTLINE_WIDTH),
        WindowGeometry::new(outer.x, outer.y, OUTLINE_WIDTH, outer.height),
        WindowGeometry::new(outer.right() - OUTLINE_WIDTH, outer.y, OUTLINE_WIDTH, outer.height),
    ];
    for side in &sides {
        fill_rect(buffer, w, h, side, OUTLINE);
    }

    if let Some(caption) = caption {
        caption.paint(buffer, width, height, drag_strip);
    }
}

fn fill_rect(buffer: &mut [u32], width: i32, height: i32, rect: &WindowGeometry, color: u32) {
    let x0 = rect.x.clamp(0, width);
    let x1 = rect.right().clamp(0, width);
    let y0 = rect.y.clamp(0, height);
    let y1 = rect.bottom().clamp(0, height);

    for y in y0..y1 {
        let row = (y * width) as usize;
        buffer[row + x0 as usize..row + x1 as usize].fill(color);
    }
}
