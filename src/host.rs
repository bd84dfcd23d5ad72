//! Interfaces the canvas needs from its surroundings.
//!
//! The canvas never reaches for ambient state. Element storage, id
//! allocation, viewport measurement and pointer capture are all handed to
//! [`crate::canvas::Canvas`] explicitly.

use crate::geometry::Bounds;
use crate::types::{Element, ElementId};

/// Element list of the active page.
///
/// This is the only persistence boundary the canvas uses: every mutation
/// reads the list, edits a copy, and writes the whole list back once.
pub trait ElementStore {
    fn elements(&self) -> &[Element];
    fn set_elements(&mut self, elements: Vec<Element>);
}

/// Source of fresh element ids, unique and increasing within a page.
pub trait IdAllocator {
    fn next_element_id(&mut self) -> ElementId;
}

/// On-screen bounding rectangle of the canvas viewport.
///
/// Queried on demand for every event that needs it. `None` means the
/// viewport has not been laid out yet.
pub trait ContainerMeasure {
    fn container_bounds(&self) -> Option<Bounds>;
}

/// Scoped pointer capture for the duration of one gesture.
///
/// `acquire` is called when a drag, resize or pan starts; `release` is called
/// exactly once for each acquisition, when the gesture ends for any reason.
pub trait PointerCapture {
    fn acquire(&mut self);
    fn release(&mut self);
}

/// Everything the canvas needs from the UI toolkit side.
pub trait CanvasHost: ContainerMeasure + PointerCapture {}

impl<T: ContainerMeasure + PointerCapture> CanvasHost for T {}

/// Host with a fixed viewport rectangle and no real capture.
///
/// Useful for headless use and for hosts that re-set the bounds on resize.
#[derive(Clone, Debug, Default)]
pub struct StaticHost {
    pub bounds: Option<Bounds>,
    /// Number of currently held captures
    pub captures: usize,
}

impl StaticHost {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds: Some(bounds),
            captures: 0,
        }
    }

    pub fn unmeasured() -> Self {
        Self::default()
    }
}

impl ContainerMeasure for StaticHost {
    fn container_bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}

impl PointerCapture for StaticHost {
    fn acquire(&mut self) {
        self.captures += 1;
    }

    fn release(&mut self) {
        self.captures = self.captures.saturating_sub(1);
    }
}

/// Plain in-memory element list with its own id counter.
#[derive(Clone, Debug, Default)]
pub struct VecStore {
    pub elements: Vec<Element>,
    next_id: u64,
}

impl VecStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing elements; new ids continue after the highest one.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let next_id = elements.iter().map(|e| e.id.0).max().unwrap_or(0);
        Self { elements, next_id }
    }
}

impl ElementStore for VecStore {
    fn elements(&self) -> &[Element] {
        &self.elements
    }

    fn set_elements(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }
}

impl IdAllocator for VecStore {
    fn next_element_id(&mut self) -> ElementId {
        self.next_id += 1;
        ElementId(self.next_id)
    }
}
