//! wry-backed content view

use crate::content::ContentView;
use crate::utils::error::{IntoWidgetError, Result};
use crate::window::geometry::WindowGeometry;
use log::{info, warn};
use winit::window::Window as WinitWindow;
use wry::dpi::{PhysicalPosition, PhysicalSize};
use wry::{Rect, WebView, WebViewBuilder};

/// Web view embedded as a child of the overlay window
pub struct WebContentView {
    webview: WebView,
    zoom_factor: f64,
}

impl WebContentView {
    /// Load `url` into a child web view of `window` covering `bounds`
    pub fn new(window: &WinitWindow, url: &str, bounds: WindowGeometry) -> Result<Self> {
        let webview = WebViewBuilder::new()
            .with_url(url)
            .with_bounds(to_rect(bounds))
            .build_as_child(window)
            .content_err("Failed to create web view")?;

        info!("Embedded {}", url);
        Ok(Self { webview, zoom_factor: 1.0 })
    }
}

impl ContentView for WebContentView {
    fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    fn set_zoom_factor(&mut self, zoom_factor: f64) {
        if let Err(e) = self.webview.zoom(zoom_factor) {
            warn!("Failed to zoom web view to {}: {}", zoom_factor, e);
            return;
        }
        self.zoom_factor = zoom_factor;
    }

    fn set_bounds(&mut self, bounds: WindowGeometry) {
        if let Err(e) = self.webview.set_bounds(to_rect(bounds)) {
            warn!("Failed to move web view to {:?}: {}", bounds, e);
        }
    }
}

fn to_rect(bounds: WindowGeometry) -> Rect {
    Rect {
        position: PhysicalPosition::new(bounds.x, bounds.y).into(),
        size: PhysicalSize::new(bounds.width.max(0) as u32, bounds.height.max(0) as u32).into(),
    }
}
