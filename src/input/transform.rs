//! Canvas transformations - wheel zoom and wheel pan.

use crate::canvas::Canvas;
use crate::constants::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::geometry::Point;
use crate::host::{CanvasHost, ElementStore, IdAllocator};
use crate::input::events::WheelEvent;
use tracing::trace;

impl<S, H> Canvas<S, H>
where
    S: ElementStore + IdAllocator,
    H: CanvasHost,
{
    /// Ctrl/Cmd + wheel zooms around the pointer; a plain wheel pans.
    pub fn handle_wheel(&mut self, event: &WheelEvent) {
        let delta = event.delta.pixel_delta();

        if event.modifiers.command() {
            let factor = if delta.y > 0.0 { ZOOM_OUT_FACTOR } else { ZOOM_IN_FACTOR };
            if self
                .view
                .zoom_around(factor, event.position, self.container_bounds())
            {
                trace!(zoom = self.view.zoom(), "Wheel zoom");
            }
            return;
        }

        self.view.pan_by(Point::ORIGIN - delta);
    }
}
