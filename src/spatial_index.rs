//! Spatial Index Module
//!
//! R-tree over element rectangles in canvas space, bulk-loaded from the
//! store for each hit test. Store order is the draw order, so later elements
//! win overlapping hits.

use crate::types::{Element, ElementId};
use rstar::{AABB, RTree, RTreeObject};

/// One element's bounding box and its place in draw order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SpatialEntry {
    element_id: ElementId,
    z: usize,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl SpatialEntry {
    fn new(element: &Element, z: usize) -> Self {
        Self {
            element_id: element.id,
            z,
            min_x: element.x,
            min_y: element.y,
            max_x: element.x + element.width,
            max_y: element.y + element.height,
        }
    }

    #[inline]
    fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

/// Spatial index for the elements of one page.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    /// Bulk-load an index from elements in store order.
    pub fn from_elements(elements: &[Element]) -> Self {
        let entries = elements
            .iter()
            .enumerate()
            .map(|(z, element)| SpatialEntry::new(element, z))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// The top-most element containing the given canvas point. Edges count
    /// as inside.
    pub fn topmost_at(&self, x: f32, y: f32) -> Option<ElementId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .max_by_key(|entry| entry.z)
            .map(|entry| entry.element_id)
    }
}
