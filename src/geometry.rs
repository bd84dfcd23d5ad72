//! Geometry primitives and bounds clamping.
//!
//! Two coordinate spaces meet here. *Canvas space* is the fixed logical
//! plane elements are stored in; *screen space* is pointer pixels. The
//! zoom/pan dependent conversions live on [`crate::view::ViewTransform`];
//! this module only holds the space-independent pieces.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point or vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn scale(self, factor: f32) -> Point {
        point(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        point(self.x, self.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }
}

/// On-screen rectangle of the canvas viewport, in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        point(self.left, self.top)
    }

    /// Convert a client position into a position relative to the viewport.
    #[inline]
    pub fn to_local(&self, client: Point) -> Point {
        client - self.origin()
    }

    /// Whether a client position falls inside the viewport.
    #[inline]
    pub fn contains(&self, client: Point) -> bool {
        client.x >= self.left
            && client.x <= self.left + self.width
            && client.y >= self.top
            && client.y <= self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        point(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Canvas extent and minimum element size used for clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasLimits {
    pub width: f32,
    pub height: f32,
    pub min_size: f32,
}

impl Default for CanvasLimits {
    fn default() -> Self {
        Self {
            width: crate::constants::CANVAS_WIDTH,
            height: crate::constants::CANVAS_HEIGHT,
            min_size: crate::constants::MIN_ELEMENT_SIZE,
        }
    }
}

/// Clamp a rectangle into the canvas.
///
/// Size is clamped first, then the position is clamped against the already
/// clamped size, so the result always satisfies
/// `0 <= x <= limits.width - width` (and likewise for y).
pub fn constrain_to_bounds(rect: Rect, limits: &CanvasLimits) -> Rect {
    let width = rect.width.clamp(limits.min_size, limits.width);
    let height = rect.height.clamp(limits.min_size, limits.height);
    let x = rect.x.clamp(0.0, limits.width - width);
    let y = rect.y.clamp(0.0, limits.height - height);
    Rect { x, y, width, height }
}

/// Convert a screen-space delta to canvas space (for resize operations)
#[inline]
pub fn delta_screen_to_canvas(delta: Point, zoom: f32) -> Point {
    point(delta.x / zoom, delta.y / zoom)
}
