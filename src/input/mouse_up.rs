//! Pointer up / leave handling - end of every gesture.

use crate::canvas::Canvas;
use crate::host::{CanvasHost, ElementStore, IdAllocator};
use crate::input::events::PointerEvent;

impl<S, H> Canvas<S, H>
where
    S: ElementStore + IdAllocator,
    H: CanvasHost,
{
    /// Finish the current gesture. Resets to Idle even if nothing was active.
    pub fn handle_pointer_up(&mut self, _event: &PointerEvent) {
        self.end_gesture();
    }

    /// The pointer left the viewport; same as a release.
    pub fn handle_pointer_leave(&mut self) {
        self.end_gesture();
    }
}
