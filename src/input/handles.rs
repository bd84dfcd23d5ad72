//! Resize handles - detection on the selected element and directional resize.

use crate::geometry::{Point, Rect};

/// One of the eight resize hotspots on an element's border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    pub fn affects_top(&self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    pub fn affects_bottom(&self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    pub fn affects_left(&self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    pub fn affects_right(&self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    pub fn is_corner(&self) -> bool {
        matches!(self, Self::NE | Self::NW | Self::SE | Self::SW)
    }

    /// Cursor name the host should show while hovering this handle.
    pub fn cursor(&self) -> &'static str {
        match self {
            Self::N => "n-resize",
            Self::S => "s-resize",
            Self::E => "e-resize",
            Self::W => "w-resize",
            Self::NE => "ne-resize",
            Self::NW => "nw-resize",
            Self::SE => "se-resize",
            Self::SW => "sw-resize",
        }
    }
}

#[inline]
fn near(value: f32, edge: f32, tolerance: f32) -> bool {
    value >= edge - tolerance && value <= edge + tolerance
}

/// Find the resize handle under `pointer`, if any.
///
/// `rect` and `pointer` are both in container-relative screen pixels. The
/// right edge band is checked before the left one, and within each band the
/// bottom corner wins over the top corner, which wins over the mid-edge.
/// Returns `None` for body hits and misses.
pub fn detect_resize_handle(rect: Rect, pointer: Point, tolerance: f32) -> Option<ResizeHandle> {
    let (left, right, top, bottom) = (rect.x, rect.right(), rect.y, rect.bottom());
    let (px, py) = (pointer.x, pointer.y);
    let within_x = px >= left && px <= right;
    let within_y = py >= top && py <= bottom;

    if near(px, right, tolerance) {
        if near(py, bottom, tolerance) {
            return Some(ResizeHandle::SE);
        }
        if near(py, top, tolerance) {
            return Some(ResizeHandle::NE);
        }
        if within_y {
            return Some(ResizeHandle::E);
        }
    }

    if near(px, left, tolerance) {
        if near(py, bottom, tolerance) {
            return Some(ResizeHandle::SW);
        }
        if near(py, top, tolerance) {
            return Some(ResizeHandle::NW);
        }
        if within_y {
            return Some(ResizeHandle::W);
        }
    }

    if near(py, bottom, tolerance) && within_x {
        return Some(ResizeHandle::S);
    }
    if near(py, top, tolerance) && within_x {
        return Some(ResizeHandle::N);
    }

    None
}

/// Apply a canvas-space pointer delta to `rect` through `handle`.
///
/// Without an aspect ratio every moving edge follows the pointer: west and
/// north handles shift the origin by the delta and shrink the size by the
/// same amount. Only the size is raised to `min_size` here, so a handle
/// dragged past the opposite edge carries the origin with it.
///
/// With `aspect_ratio` (width / height) set, the result keeps that ratio:
/// corners follow the smaller of the two proposed sizes, edges drive the
/// other axis and stay centered on it, and the edges opposite the handle
/// stay put.
///
/// The result is not clamped to the canvas; callers run it through
/// `constrain_to_bounds`.
pub fn apply_resize(
    rect: Rect,
    handle: ResizeHandle,
    delta: Point,
    aspect_ratio: Option<f32>,
    min_size: f32,
) -> Rect {
    let mut x = rect.x;
    let mut y = rect.y;
    let mut width = rect.width;
    let mut height = rect.height;

    if handle.affects_right() {
        width += delta.x;
    }
    if handle.affects_left() {
        x += delta.x;
        width -= delta.x;
    }
    if handle.affects_bottom() {
        height += delta.y;
    }
    if handle.affects_top() {
        y += delta.y;
        height -= delta.y;
    }

    match aspect_ratio {
        Some(ratio) if ratio.is_finite() && ratio > 0.0 => {
            resize_locked(rect, handle, width, height, ratio, min_size)
        }
        _ => Rect::new(x, y, width.max(min_size), height.max(min_size)),
    }
}

fn resize_locked(
    rect: Rect,
    handle: ResizeHandle,
    width: f32,
    height: f32,
    ratio: f32,
    min_size: f32,
) -> Rect {
    let horizontal = handle.affects_left() || handle.affects_right();
    let (mut width, mut height) = if handle.is_corner() {
        let w = width.min(height * ratio);
        (w, w / ratio)
    } else if horizontal {
        (width, width / ratio)
    } else {
        (height * ratio, height)
    };

    // Smallest size with this ratio that meets both minimums.
    if width < min_size || height < min_size {
        if ratio >= 1.0 {
            (width, height) = (min_size * ratio, min_size);
        } else {
            (width, height) = (min_size, min_size / ratio);
        }
    }

    let x = if handle.affects_left() {
        rect.right() - width
    } else if handle.affects_right() {
        rect.x
    } else {
        rect.x + (rect.width - width) / 2.0
    };
    let y = if handle.affects_top() {
        rect.bottom() - height
    } else if handle.affects_bottom() {
        rect.y
    } else {
        rect.y + (rect.height - height) / 2.0
    };

    Rect::new(x, y, width, height)
}
