//! Raw input events consumed by the canvas.
//!
//! These are toolkit-neutral: a host translates its own mouse, wheel and key
//! events into these structs before handing them to the canvas.

use crate::constants::SCROLL_LINE_HEIGHT;
use crate::geometry::Point;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Modifier keys held during an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    /// Command on macOS, Super elsewhere
    pub platform: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn control() -> Self {
        Self {
            control: true,
            ..Self::default()
        }
    }

    pub fn platform() -> Self {
        Self {
            platform: true,
            ..Self::default()
        }
    }

    /// Ctrl or Cmd, whichever the platform uses for shortcuts.
    #[inline]
    pub fn command(&self) -> bool {
        self.control || self.platform
    }
}

/// Pointer down, move or up.
///
/// `position` is in client pixels. `click_count` is 2 for the second press
/// of a double-click.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub position: Point,
    pub button: MouseButton,
    pub modifiers: Modifiers,
    pub click_count: usize,
    pub timestamp: Instant,
}

impl PointerEvent {
    pub fn new(position: Point, button: MouseButton) -> Self {
        Self {
            position,
            button,
            modifiers: Modifiers::none(),
            click_count: 1,
            timestamp: Instant::now(),
        }
    }

    pub fn left(position: Point) -> Self {
        Self::new(position, MouseButton::Left)
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_click_count(mut self, click_count: usize) -> Self {
        self.click_count = click_count;
        self
    }

    pub fn at(mut self, timestamp: Instant) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[inline]
    pub fn is_double_click(&self) -> bool {
        self.click_count == 2
    }
}

/// Scroll amount, either precise pixels (trackpads) or wheel lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDelta {
    Pixels(Point),
    Lines(Point),
}

impl ScrollDelta {
    /// Delta in pixels.
    pub fn pixel_delta(&self) -> Point {
        match *self {
            ScrollDelta::Pixels(delta) => delta,
            ScrollDelta::Lines(delta) => delta.scale(SCROLL_LINE_HEIGHT),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WheelEvent {
    pub position: Point,
    pub delta: ScrollDelta,
    pub modifiers: Modifiers,
}

impl WheelEvent {
    pub fn pixels(position: Point, delta: Point) -> Self {
        Self {
            position,
            delta: ScrollDelta::Pixels(delta),
            modifiers: Modifiers::none(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Delete,
    Backspace,
    Character(char),
}

#[derive(Clone, Copy, Debug)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::none(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
