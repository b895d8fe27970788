//! Drag strip caption
//!
//! The strip carries a short caption ("stalcraft.widgets" by default),
//! centred, in a monospace face. Glyphs are rasterized once with fontdue and
//! blended into the softbuffer frame on every repaint.

use crate::utils::error::{IntoWidgetError, Result, WidgetError};
use crate::window::geometry::WindowGeometry;
use fontdue::{Font, FontSettings};
use log::{debug, info};
use std::path::Path;

/// Caption size in pixels (10pt at 96 dpi)
pub const CAPTION_PX: f32 = 13.0;

/// Caption colour
pub const CAPTION_COLOR: u32 = 0x00FF_FFFF;

/// Monospace faces tried in order, Courier New first
const FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\cour.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "/System/Library/Fonts/Supplemental/Courier New.ttf",
    "/Library/Fonts/Courier New.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/usr/share/fonts/truetype/msttcorefonts/Courier_New.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/usr/share/fonts/TTF/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
];

/// One rasterized glyph
#[derive(Debug, Clone)]
struct Glyph {
    /// Left edge relative to the start of the text
    x: i32,

    /// Top edge relative to the baseline, negative above it
    y: i32,

    width: usize,
    height: usize,

    /// Row-major coverage, 0..=255
    coverage: Vec<u8>,
}

/// Caption text rasterized at [`CAPTION_PX`]
#[derive(Debug, Clone)]
pub struct Caption {
    glyphs: Vec<Glyph>,
    width: i32,
    ascent: i32,
    descent: i32,
}

impl Caption {
    /// Rasterize `text` with the font in `font_data`
    pub fn from_bytes(font_data: &[u8], text: &str) -> Result<Self> {
        let font = Font::from_bytes(font_data, FontSettings::default())
            .font_err("Failed to parse font")?;
        Ok(Self::rasterize(&font, text))
    }

    /// Rasterize `text` with the font file at `path`
    pub fn from_file(path: &Path, text: &str) -> Result<Self> {
        let font_data = std::fs::read(path).font_err("Failed to read font file")?;
        Self::from_bytes(&font_data, text)
    }

    /// Rasterize `text` with the first monospace system font found
    pub fn load_system_font(text: &str) -> Result<Self> {
        for path in FONT_CANDIDATES.iter().map(Path::new).filter(|p| p.exists()) {
            match Self::from_file(path, text) {
                Ok(caption) => {
                    info!("Caption font: {:?}", path);
                    return Ok(caption);
                }
                Err(e) => debug!("Skipping {:?}: {}", path, e),
            }
        }

        Err(WidgetError::Font("No monospace system font found".to_string()))
    }

    fn rasterize(font: &Font, text: &str) -> Self {
        let (ascent, descent) = font
            .horizontal_line_metrics(CAPTION_PX)
            .map(|line| (line.ascent.round() as i32, line.descent.round() as i32))
            .unwrap_or((CAPTION_PX as i32, 0));

        let mut pen = 0.0f32;
        let mut glyphs = Vec::new();
        for ch in text.chars() {
            let (metrics, coverage) = font.rasterize(ch, CAPTION_PX);
            if metrics.width > 0 && metrics.height > 0 {
                glyphs.push(Glyph {
                    x: pen.round() as i32 + metrics.xmin,
                    y: -(metrics.height as i32) - metrics.ymin,
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                });
            }
            pen += metrics.advance_width;
        }

        Self { glyphs, width: pen.round() as i32, ascent, descent }
    }

    /// Advance width of the whole caption
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Blend the caption into a `width` x `height` frame, centred in `strip`
    ///
    /// Nothing is drawn outside the strip.
    pub fn paint(&self, buffer: &mut [u32], width: u32, height: u32, strip: &WindowGeometry) {
        let (w, h) = (width as i32, height as i32);
        if buffer.len() < (width as usize) * (height as usize) {
            return;
        }

        let (x_min, x_max) = (strip.x.max(0), strip.right().min(w));
        let (y_min, y_max) = (strip.y.max(0), strip.bottom().min(h));

        // descent is negative
        let left = strip.x + (strip.width - self.width) / 2;
        let baseline = strip.y + (strip.height + self.ascent + self.descent) / 2;

        for glyph in &self.glyphs {
            for gy in 0..glyph.height {
                let py = baseline + glyph.y + gy as i32;
                if py < y_min || py >= y_max {
                    continue;
                }
                for gx in 0..glyph.width {
                    let px = left + glyph.x + gx as i32;
                    let coverage = glyph.coverage[gy * glyph.width + gx];
                    if px < x_min || px >= x_max || coverage == 0 {
                        continue;
                    }
                    let index = (py * w + px) as usize;
                    buffer[index] = blend(buffer[index], CAPTION_COLOR, coverage);
                }
            }
        }
    }
}

/// Mix `color` over `background` by `coverage` (0..=255), per channel
pub fn blend(background: u32, color: u32, coverage: u8) -> u32 {
    let alpha = u32::from(coverage);
    let channel = |shift: u32| {
        let bg = (background >> shift) & 0xFF;
        let fg = (color >> shift) & 0xFF;
        ((fg * alpha + bg * (255 - alpha) + 127) / 255) << shift
    };
    channel(16) | channel(8) | channel(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Caption made of solid `w` x `h` blocks sitting on the baseline
    fn blocks(count: usize, w: usize, h: usize) -> Caption {
        let glyphs = (0..count)
            .map(|i| Glyph {
                x: (i * w) as i32,
                y: -(h as i32),
                width: w,
                height: h,
                coverage: vec![255; w * h],
            })
            .collect();
        Caption { glyphs, width: (count * w) as i32, ascent: h as i32, descent: 0 }
    }

    #[test]
    fn test_blend() {
        assert_eq!(blend(0x0000_0000, 0x00FF_FFFF, 255), 0x00FF_FFFF);
        assert_eq!(blend(0x0012_3456, 0x00FF_FFFF, 0), 0x0012_3456);
        assert_eq!(blend(0x0000_0000, 0x00FF_FFFF, 128), 0x0080_8080);
    }

    #[test]
    fn test_caption_is_centred_in_strip() {
        let (w, h) = (120u32, 40u32);
        let mut buffer = vec![0u32; (w * h) as usize];
        let strip = WindowGeometry::new(8, 8, 104, 20);

        // 4 x 6 block: left = 8 + (104 - 4) / 2 = 58, baseline = 8 + 26 / 2 = 21
        blocks(1, 4, 6).paint(&mut buffer, w, h, &strip);

        let pixel = |x: u32, y: u32| buffer[(y * w + x) as usize];
        assert_eq!(pixel(58, 15), CAPTION_COLOR);
        assert_eq!(pixel(61, 20), CAPTION_COLOR);
        assert_eq!(pixel(57, 15), 0);
        assert_eq!(pixel(62, 15), 0);
        assert_eq!(pixel(58, 14), 0);
        assert_eq!(pixel(58, 21), 0);
    }

    #[test]
    fn test_caption_is_clipped_to_strip() {
        let (w, h) = (60u32, 40u32);
        let mut buffer = vec![0u32; (w * h) as usize];
        let strip = WindowGeometry::new(8, 8, 44, 20);

        // Twice as wide and taller than the strip
        blocks(22, 4, 30).paint(&mut buffer, w, h, &strip);

        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let inside = x >= 8 && x < 52 && y >= 8 && y < 28;
                let painted = buffer[(y * w as i32 + x) as usize] != 0;
                assert!(inside || !painted, "painted outside the strip at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_short_buffer_is_left_alone() {
        let mut buffer = vec![7u32; 10];
        blocks(3, 4, 6).paint(&mut buffer, 120, 40, &WindowGeometry::new(8, 8, 104, 20));
        assert!(buffer.iter().all(|&p| p == 7));
    }

    #[test]
    fn test_rejects_garbage_font_data() {
        let err = Caption::from_bytes(b"not a font", "stalcraft.widgets").unwrap_err();
        assert!(matches!(err, WidgetError::Font(_)));
    }

    #[test]
    fn test_system_font_caption_when_available() {
        // Not every machine ships one of the candidate faces
        let Ok(caption) = Caption::load_system_font("stalcraft.widgets") else {
            return;
        };
        assert!(caption.width() > 0);

        let (w, h) = (320u32, 40u32);
        let mut buffer = vec![0u32; (w * h) as usize];
        caption.paint(&mut buffer, w, h, &WindowGeometry::new(8, 8, 304, 20));
        assert!(buffer.iter().any(|&p| p != 0));
    }
}
