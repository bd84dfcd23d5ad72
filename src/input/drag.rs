//! Pointer move handling - element drag, element resize, canvas pan.
//!
//! ## Performance Notes
//!
//! Pointer move fires at display rate or faster while a button is held.
//! - Early exit for Idle
//! - One store round trip per processed move
//! - Resize moves are throttled to one per frame; drag and pan are not
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::canvas::Canvas;
use crate::geometry::{Point, constrain_to_bounds, delta_screen_to_canvas};
use crate::host::{CanvasHost, ElementStore, IdAllocator};
use crate::input::InputState;
use crate::input::events::PointerEvent;
use crate::input::handles::apply_resize;
use crate::perf::FRAME_BUDGET_MS;
use crate::profile_scope;
use crate::types::ElementId;
use tracing::{debug, trace};

impl<S, H> Canvas<S, H>
where
    S: ElementStore + IdAllocator,
    H: CanvasHost,
{
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        if self.input_state.is_idle() {
            return;
        }
        profile_scope!("handle_pointer_move", FRAME_BUDGET_MS);

        // No measurement, no mapping: hold the element where it is.
        let Some(bounds) = self.container_bounds() else {
            return;
        };

        match self.input_state {
            InputState::Idle => {}
            InputState::Panning { last_pos } => {
                self.view.pan_by(event.position - last_pos);
                self.input_state.update_last_pos(event.position);
            }
            InputState::DraggingElement {
                element_id,
                drag_offset,
            } => {
                profile_scope!("element_drag");
                let canvas_pos = self.view.screen_to_canvas(event.position, Some(bounds));
                self.drag_element_to(element_id, canvas_pos - drag_offset);
            }
            InputState::ResizingElement {
                element_id,
                handle,
                last_pos,
                aspect_ratio,
            } => {
                if !self.resize_throttle.ready(event.timestamp) {
                    trace!("Resize move throttled");
                    return;
                }
                profile_scope!("element_resize");

                let local = bounds.to_local(event.position);
                let delta = delta_screen_to_canvas(local - last_pos, self.view.zoom());
                let limits = self.config.limits();
                let resized = self.update_element(element_id, |element| {
                    let rect = apply_resize(element.rect(), handle, delta, aspect_ratio, limits.min_size);
                    element.set_rect(constrain_to_bounds(rect, &limits));
                });

                if resized.is_none() {
                    self.abandon_gesture(element_id);
                    return;
                }
                self.input_state.update_last_pos(local);
            }
        }
    }

    /// Move an element's origin, clamped with its size as of this tick.
    fn drag_element_to(&mut self, element_id: ElementId, origin: Point) {
        let limits = self.config.limits();
        let moved = self.update_element(element_id, |element| {
            let mut rect = element.rect();
            rect.x = origin.x;
            rect.y = origin.y;
            element.set_rect(constrain_to_bounds(rect, &limits));
        });

        if moved.is_none() {
            self.abandon_gesture(element_id);
        }
    }

    /// The gesture target vanished under us; end the gesture quietly.
    fn abandon_gesture(&mut self, element_id: ElementId) {
        debug!(%element_id, "Gesture target no longer exists");
        self.end_gesture();
    }
}
