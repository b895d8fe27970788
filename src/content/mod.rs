//! Embedded content view
//!
//! The overlay shows one remote page. The page itself is rendered by the web
//! engine; the widget only positions the view and controls its zoom.

use crate::window::geometry::WindowGeometry;
use log::debug;

#[cfg(feature = "webview")]
pub mod web;

#[cfg(feature = "webview")]
pub use web::WebContentView;

/// Rectangular child surface showing the embedded page
pub trait ContentView {
    /// Current zoom, 1.0 = 100%
    fn zoom_factor(&self) -> f64;

    /// Change the zoom
    fn set_zoom_factor(&mut self, zoom_factor: f64);

    /// Move the view to a window-local rectangle
    fn set_bounds(&mut self, bounds: WindowGeometry);
}

impl<V: ContentView + ?Sized> ContentView for Box<V> {
    fn zoom_factor(&self) -> f64 {
        (**self).zoom_factor()
    }

    fn set_zoom_factor(&mut self, zoom_factor: f64) {
        (**self).set_zoom_factor(zoom_factor)
    }

    fn set_bounds(&mut self, bounds: WindowGeometry) {
        (**self).set_bounds(bounds)
    }
}

/// Content view without a web engine
///
/// Keeps the zoom and bounds so the rest of the widget behaves the same when
/// built without the `webview` feature.
#[derive(Debug, Clone)]
pub struct DetachedContentView {
    url: String,
    zoom_factor: f64,
    bounds: WindowGeometry,
}

impl DetachedContentView {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        debug!("Content view for {} has no web engine attached", url);
        Self {
            url,
            zoom_factor: 1.0,
            bounds: WindowGeometry::new(0, 0, 0, 0),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn bounds(&self) -> WindowGeometry {
        self.bounds
    }
}

impl ContentView for DetachedContentView {
    fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    fn set_zoom_factor(&mut self, zoom_factor: f64) {
        self.zoom_factor = zoom_factor;
    }

    fn set_bounds(&mut self, bounds: WindowGeometry) {
        self.bounds = bounds;
    }
}
