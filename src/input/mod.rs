//! Pointer, wheel and keyboard input handling for the canvas.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current gesture. Handlers are `impl Canvas` blocks split by event
//! kind; each one reads whatever it needs (viewport bounds, element sizes)
//! fresh from the canvas collaborators on every call.
//!
//! ## Modules
//!
//! - `events` - Toolkit-neutral pointer, wheel and key events
//! - `state` - Input state machine enum and helper methods
//! - `handles` - Resize handle detection and directional resize
//! - `throttle` - One-update-per-frame throttle for resize
//! - `mouse_down` - Pointer down (selection, gesture start, double-click)
//! - `drag` - Pointer move (drag, resize, pan)
//! - `mouse_up` - Pointer up / leave (gesture end)
//! - `transform` - Wheel zoom and pan
//! - `keyboard` - Escape, media overlay shortcut, delete

pub mod events;
pub mod handles;
mod state;
pub mod throttle;
mod mouse_down;
mod drag;
mod mouse_up;
mod transform;
mod keyboard;

pub use events::{Key, KeyEvent, Modifiers, MouseButton, PointerEvent, ScrollDelta, WheelEvent};
pub use handles::{ResizeHandle, apply_resize, detect_resize_handle};
pub use state::InputState;
