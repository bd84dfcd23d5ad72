//! Pointer down handling - selection, gesture start, double-click creation.
//!
//! Classification order for a press:
//! 1. resize handle of the *selected* element (primary button only), unless
//!    another element is drawn over that spot
//! 2. body of the top-most element under the pointer (any button)
//! 3. empty canvas: pan (middle, or ctrl/cmd + primary), create text
//!    (double-click), or clear selection

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::host::{CanvasHost, ElementStore, IdAllocator};
use crate::input::events::{MouseButton, PointerEvent};
use crate::input::handles::{ResizeHandle, detect_resize_handle};
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::types::ElementId;
use tracing::debug;

impl<S, H> Canvas<S, H>
where
    S: ElementStore + IdAllocator,
    H: CanvasHost,
{
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_down");

        // A press while a gesture is still open means we missed its release.
        if self.input_state.is_active() {
            self.end_gesture();
        }

        let Some(bounds) = self.container_bounds() else {
            debug!("Pointer down before the canvas was measured");
            return;
        };
        let local = bounds.to_local(event.position);
        let canvas_pos = self.view.screen_to_canvas(event.position, Some(bounds));

        let hit = self.topmost_element_at(canvas_pos);

        if event.button == MouseButton::Left {
            if let Some((id, handle)) = self.selected_handle_at(local, hit) {
                let ratio = self.element(id).and_then(|e| e.locked_aspect_ratio());
                self.input_state.start_resizing(id, handle, local, ratio);
                self.resize_throttle.reset();
                self.acquire_capture();
                debug!(%id, ?handle, "Resize started");
                return;
            }
        }

        if let Some(id) = hit {
            self.press_on_element(id, event, canvas_pos);
        } else {
            self.press_on_empty_canvas(event, canvas_pos);
        }
    }

    /// Resize handle a primary press at `client` would grab.
    pub fn resize_handle_at(&self, client: Point) -> Option<ResizeHandle> {
        let bounds = self.container_bounds()?;
        if !bounds.contains(client) {
            return None;
        }
        let canvas_pos = self.view.screen_to_canvas(client, Some(bounds));
        let hit = self.topmost_element_at(canvas_pos);
        self.selected_handle_at(bounds.to_local(client), hit)
            .map(|(_, handle)| handle)
    }

    /// Cursor the host should show with the pointer at `client`.
    ///
    /// An active resize keeps its cursor wherever the pointer goes; otherwise
    /// this reports the handle under the pointer. `None` means the default
    /// cursor.
    pub fn cursor_at(&self, client: Point) -> Option<&'static str> {
        self.input_state
            .resize_handle()
            .or_else(|| self.resize_handle_at(client))
            .map(|handle| handle.cursor())
    }

    fn topmost_element_at(&self, canvas_pos: Point) -> Option<ElementId> {
        profile_scope!("hit_test_elements");
        SpatialIndex::from_elements(self.store.elements()).topmost_at(canvas_pos.x, canvas_pos.y)
    }

    /// Handles only exist on the selected element: the first click selects,
    /// a later press on the border resizes. An element drawn on top of the
    /// border takes the press instead.
    fn selected_handle_at(
        &self,
        local: Point,
        hit: Option<ElementId>,
    ) -> Option<(ElementId, ResizeHandle)> {
        let id = self.selected?;
        if hit.is_some_and(|hit| hit != id) {
            return None;
        }
        let screen_rect = self.view.rect_to_screen(self.element(id)?.rect());
        detect_resize_handle(screen_rect, local, self.config.resize_tolerance)
            .map(|handle| (id, handle))
    }

    fn press_on_element(&mut self, id: ElementId, event: &PointerEvent, canvas_pos: Point) {
        let Some(element) = self.element(id) else {
            return;
        };
        let (is_text, is_editing, origin) = (element.is_text(), element.is_editing, element.origin());

        self.selected = Some(id);

        if event.is_double_click() && is_text {
            self.begin_editing(id);
            return;
        }

        // The text widget owns the pointer while its element is being edited.
        if is_editing {
            return;
        }

        let drag_offset = canvas_pos - origin;
        self.input_state.start_dragging(id, drag_offset);
        self.acquire_capture();
        debug!(%id, is_text, button = ?event.button, "Drag started");
    }

    fn press_on_empty_canvas(&mut self, event: &PointerEvent, canvas_pos: Point) {
        let wants_pan = event.button == MouseButton::Middle
            || (event.button == MouseButton::Left && event.modifiers.command());

        if wants_pan {
            self.input_state.start_panning(event.position);
            self.acquire_capture();
            debug!("Pan started");
            return;
        }

        if event.button == MouseButton::Left && event.is_double_click() {
            self.add_text_at(canvas_pos);
            return;
        }

        self.selected = None;
        self.end_editing();
    }
}
