//! Keyboard shortcuts handled by the canvas itself.

use crate::canvas::Canvas;
use crate::host::{CanvasHost, ElementStore, IdAllocator};
use crate::input::events::{Key, KeyEvent};

impl<S, H> Canvas<S, H>
where
    S: ElementStore + IdAllocator,
    H: CanvasHost,
{
    /// Returns `true` if the key was consumed.
    ///
    /// - `Escape` leaves text edit mode and closes the media overlay. The
    ///   pointer gesture, if any, is not touched.
    /// - `Ctrl/Cmd + I` opens the media overlay.
    /// - `Delete` / `Backspace` remove the selected element, unless a text
    ///   element is being edited (the key belongs to the text widget then).
    pub fn handle_key_down(&mut self, event: &KeyEvent) -> bool {
        match event.key {
            Key::Escape => {
                self.end_editing();
                self.close_media_overlay();
                true
            }
            Key::Character(c) if event.modifiers.command() && c.eq_ignore_ascii_case(&'i') => {
                self.open_media_overlay();
                true
            }
            Key::Delete | Key::Backspace if self.editing_id().is_none() => {
                match self.selected {
                    Some(id) => self.delete_element(id),
                    None => false,
                }
            }
            _ => false,
        }
    }
}
