//! View transform - zoom and pan of one canvas view.
//!
//! Handles conversion between client pixel coordinates (screen space) and
//! canvas coordinates. Screen positions passed in are *client* positions;
//! the container origin is subtracted before the pan/zoom mapping.
//!
//! ```text
//! canvas = (client - container.origin - pan) / zoom
//! local  = canvas * zoom + pan
//! ```

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::geometry::{Bounds, Point, Rect, point};

/// Zoom factor and pan offset of a canvas view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    zoom: f32,
    pan: Point,
    min_zoom: f32,
    max_zoom: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(MIN_ZOOM, MAX_ZOOM)
    }
}

impl ViewTransform {
    pub fn new(min_zoom: f32, max_zoom: f32) -> Self {
        Self {
            zoom: DEFAULT_ZOOM.clamp(min_zoom, max_zoom),
            pan: Point::ORIGIN,
            min_zoom,
            max_zoom,
        }
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn zoom_range(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    /// Set the zoom level, clamped to the zoom range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    /// Pan by a screen-space delta.
    pub fn pan_by(&mut self, delta: Point) {
        self.pan = self.pan + delta;
    }

    /// Convert a client position to canvas space.
    ///
    /// Returns the origin when the container has not been measured yet.
    pub fn screen_to_canvas(&self, client: Point, container: Option<Bounds>) -> Point {
        let Some(container) = container else {
            return Point::ORIGIN;
        };
        let local = container.to_local(client);
        point((local.x - self.pan.x) / self.zoom, (local.y - self.pan.y) / self.zoom)
    }

    /// Convert a canvas position to a container-relative screen position.
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        point(canvas.x * self.zoom + self.pan.x, canvas.y * self.zoom + self.pan.y)
    }

    /// On-screen (container-relative) rectangle of a canvas rectangle.
    pub fn rect_to_screen(&self, rect: Rect) -> Rect {
        let origin = self.canvas_to_screen(rect.origin());
        Rect::new(origin.x, origin.y, rect.width * self.zoom, rect.height * self.zoom)
    }

    /// Multiply the zoom by `factor` while keeping the canvas point under
    /// `client` fixed on screen.
    ///
    /// Returns `true` if the zoom changed. When the clamped zoom equals the
    /// current zoom the pan is left untouched.
    pub fn zoom_around(&mut self, factor: f32, client: Point, container: Option<Bounds>) -> bool {
        let Some(bounds) = container else {
            return false;
        };
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if new_zoom == self.zoom {
            return false;
        }

        let local = bounds.to_local(client);
        let anchor = self.screen_to_canvas(client, container);
        self.pan = local - anchor.scale(new_zoom);
        self.zoom = new_zoom;
        true
    }

    /// Fit `content` (plus `padding` on every side) into a viewport of
    /// `viewport_width` x `viewport_height` pixels and center it.
    pub fn fit_rect(&mut self, content: Rect, padding: f32, viewport_width: f32, viewport_height: f32) {
        let content_width = content.width + padding * 2.0;
        let content_height = content.height + padding * 2.0;
        if content_width <= 0.0 || content_height <= 0.0 {
            return;
        }

        let scale_x = viewport_width / content_width;
        let scale_y = viewport_height / content_height;
        let zoom = scale_x.min(scale_y).min(self.max_zoom).max(self.min_zoom);

        self.zoom = zoom;
        self.pan = point(
            (viewport_width - content_width * zoom) / 2.0 - (content.x - padding) * zoom,
            (viewport_height - content_height * zoom) / 2.0 - (content.y - padding) * zoom,
        );
    }

    /// Back to 100% zoom with no pan.
    pub fn reset(&mut self) {
        self.zoom = DEFAULT_ZOOM.clamp(self.min_zoom, self.max_zoom);
        self.pan = Point::ORIGIN;
    }
}
