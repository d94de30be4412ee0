//! Spatial Index Module
//!
//! R-tree over item footprints in grid space: the horizontal axis is the
//! timeline position, the vertical axis is the row index. An item on row `r`
//! covers `[r, r + 1)` vertically. Point queries are O(log n).

use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Footprint of one item, keyed by its index in the store.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_index: usize,
    pub min_x: f64,
    pub min_row: f64,
    pub max_x: f64,
    pub max_row: f64,
}

impl SpatialEntry {
    pub fn new(item_index: usize, x: f64, width: f64, row: u32) -> Self {
        let row = f64::from(row);
        Self {
            item_index,
            min_x: x,
            min_row: row,
            max_x: x + width,
            max_row: row + 1.0,
        }
    }

    /// Half-open on the right and bottom so adjacent blocks never both match
    #[inline]
    pub fn contains_point(&self, x: f64, row: f64) -> bool {
        x >= self.min_x && x < self.max_x && row >= self.min_row && row < self.max_row
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_row], [self.max_x, self.max_row])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_index == other.item_index
    }
}

/// Spatial index for grid items using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<usize, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, item_index: usize, x: f64, width: f64, row: u32) {
        if let Some(old_entry) = self.entries.remove(&item_index) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(item_index, x, width, row);
        self.tree.insert(entry);
        self.entries.insert(item_index, entry);
    }

    /// Indices of all items covering the grid point
    pub fn query_point(&self, x: f64, row: f64) -> Vec<usize> {
        let point_envelope = AABB::from_point([x, row]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, row))
            .map(|entry| entry.item_index)
            .collect()
    }

    /// Replace every entry with `(index, x, width, row)` tuples
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: Iterator<Item = (usize, f64, f64, u32)>,
    {
        let entries: Vec<SpatialEntry> = items
            .map(|(index, x, width, row)| SpatialEntry::new(index, x, width, row))
            .collect();

        self.entries = entries.iter().map(|e| (e.item_index, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
