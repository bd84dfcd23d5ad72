//! Input state machine - unified state for all pointer interactions.
//!
//! A single enum instead of separate `is_dragging` / `is_resizing` /
//! `is_panning` flags, so two gestures can never be active at once.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning          (middle button, or ctrl/cmd + primary, on empty canvas)
//! Idle -> DraggingElement  (primary down on an element body)
//! Idle -> ResizingElement  (primary down on the selected element's resize handle)
//!
//! Any -> Idle              (pointer up / pointer leave / gesture target deleted)
//! ```

use crate::geometry::Point;
use crate::input::handles::ResizeHandle;
use crate::types::ElementId;

/// Unified input state for all pointer interactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Canvas panning
    Panning {
        /// Client position of the last processed move
        last_pos: Point,
    },

    /// Moving one element
    DraggingElement {
        element_id: ElementId,
        /// Canvas-space offset from the element origin to the pointer
        drag_offset: Point,
    },

    /// Resizing one element
    ResizingElement {
        element_id: ElementId,
        handle: ResizeHandle,
        /// Container-relative screen position of the last processed move
        last_pos: Point,
        /// Width / height locked at gesture start, for proportional media
        aspect_ratio: Option<f32>,
    },
}

impl InputState {
    /// Returns true if any gesture is active
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently panning the canvas
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Returns true if currently dragging an element
    pub fn is_dragging_element(&self) -> bool {
        matches!(self, Self::DraggingElement { .. })
    }

    /// Returns true if currently resizing an element
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingElement { .. })
    }

    /// Get the element being dragged, if any
    pub fn dragged_element(&self) -> Option<ElementId> {
        match self {
            Self::DraggingElement { element_id, .. } => Some(*element_id),
            _ => None,
        }
    }

    /// Get the element being resized, if any
    pub fn resized_element(&self) -> Option<ElementId> {
        match self {
            Self::ResizingElement { element_id, .. } => Some(*element_id),
            _ => None,
        }
    }

    /// Element targeted by the current gesture, if any
    pub fn target_element(&self) -> Option<ElementId> {
        self.dragged_element().or_else(|| self.resized_element())
    }

    /// Get the active resize handle
    pub fn resize_handle(&self) -> Option<ResizeHandle> {
        match self {
            Self::ResizingElement { handle, .. } => Some(*handle),
            _ => None,
        }
    }

    /// Get drag offset
    pub fn drag_offset(&self) -> Option<Point> {
        match self {
            Self::DraggingElement { drag_offset, .. } => Some(*drag_offset),
            _ => None,
        }
    }

    /// Reference position for delta-based gestures (pan and resize)
    pub fn last_pos(&self) -> Option<Point> {
        match self {
            Self::Panning { last_pos } | Self::ResizingElement { last_pos, .. } => Some(*last_pos),
            _ => None,
        }
    }

    /// Move the reference position of a pan or resize
    pub fn update_last_pos(&mut self, pos: Point) {
        if let Self::Panning { last_pos } | Self::ResizingElement { last_pos, .. } = self {
            *last_pos = pos;
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_panning(&mut self, pos: Point) {
        *self = Self::Panning { last_pos: pos };
    }

    pub fn start_dragging(&mut self, element_id: ElementId, drag_offset: Point) {
        *self = Self::DraggingElement {
            element_id,
            drag_offset,
        };
    }

    pub fn start_resizing(
        &mut self,
        element_id: ElementId,
        handle: ResizeHandle,
        pos: Point,
        aspect_ratio: Option<f32>,
    ) {
        *self = Self::ResizingElement {
            element_id,
            handle,
            last_pos: pos,
            aspect_ratio,
        };
    }
}
