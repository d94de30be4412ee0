//! Item store - owns the item collection and its lookup indexes.
//!
//! ## Indexes
//!
//! - `groups`: group key -> member indices, so group propagation never scans
//! - `spans`: (group, row) -> index, resolves which record of a multi-row
//!   block sits on a given row
//! - `spatial`: R-tree over `(x, row)` footprints for hit testing
//!
//! Structural changes (create/delete) rebuild all three. Geometry edits from
//! the gesture engines go through [`ItemStore::update_group`], which applies
//! the whole group in one call and patches the indexes incrementally.

use crate::config::EngineConfig;
use crate::constants::DEFAULT_ITEM_TYPE;
use crate::error::{TimelineError, TimelineResult};
use crate::input::snap::snap;
use crate::spatial_index::SpatialIndex;
use crate::types::{GroupKey, Item, ItemPatch};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Parameters for [`ItemStore::create_item`]
#[derive(Clone, Debug, PartialEq)]
pub struct NewItem {
    /// Left edge in timeline units (snapped and clamped to >= 0)
    pub position: f64,
    /// First row the block occupies
    pub row: u32,
    pub width: f64,
    pub item_type: String,
    pub data: serde_json::Value,
    /// Number of consecutive rows the block spans
    pub count: u32,
}

impl NewItem {
    pub fn new(position: f64, row: u32, width: f64) -> Self {
        Self {
            position,
            row,
            width,
            item_type: DEFAULT_ITEM_TYPE.to_string(),
            data: serde_json::Value::Object(serde_json::Map::new()),
            count: 1,
        }
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    pub fn spanning(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

/// Geometry written to a whole group by the gesture engines.
///
/// `x` and `width` go to every member; `primary_row` only to the item the
/// gesture grabbed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupGeometry {
    pub x: Option<f64>,
    pub width: Option<f64>,
    pub primary_row: Option<u32>,
}

/// The item collection plus its group, span and spatial indexes.
#[derive(Default)]
pub struct ItemStore {
    items: Vec<Item>,
    groups: HashMap<GroupKey, Vec<usize>>,
    spans: HashMap<(GroupKey, u32), usize>,
    spatial: SpatialIndex,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        let mut store = Self {
            items,
            ..Self::default()
        };
        store.rebuild_indexes();
        store
    }

    /// Replace the whole collection (e.g. after the host reloaded it)
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
        self.rebuild_indexes();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indices of the items sharing `group` (empty if the group is unknown)
    pub fn group_members(&self, group: &GroupKey) -> &[usize] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// The member of `group` that sits on `row`
    pub fn span_at(&self, group: &GroupKey, row: u32) -> Option<usize> {
        self.spans.get(&(group.clone(), row)).copied()
    }

    /// Topmost item covering a grid point.
    ///
    /// Items later in the collection render above earlier ones, so the
    /// highest matching index wins.
    pub fn hit_test(&self, position: f64, row: i64) -> Option<usize> {
        if row < 0 {
            return None;
        }
        self.spatial
            .query_point(position, row as f64 + 0.5)
            .into_iter()
            .max()
    }

    /// Next numeric group key (max numeric key + 1, starting at 0)
    pub fn next_group_key(&self) -> GroupKey {
        let next = self
            .groups
            .keys()
            .filter_map(GroupKey::as_number)
            .max()
            .map_or(0, |max| max + 1);
        GroupKey::Number(next)
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Create a block spanning `count` rows under a fresh group.
    ///
    /// Position and width are snapped, width is clamped to the configured
    /// range, and position is clamped to `>= 0`.
    pub fn create_item(&mut self, params: NewItem, config: &EngineConfig) -> GroupKey {
        let group = self.next_group_key();
        let unit = config.active_snap_unit();

        let x = snap(params.position, unit).max(0.0);
        let width = config.clamp_width(snap(params.width, unit));
        let count = params.count.max(1);

        for offset in 0..count {
            self.items.push(Item {
                item_type: params.item_type.clone(),
                width,
                row: params.row.saturating_add(offset),
                x,
                group: group.clone(),
                data: params.data.clone(),
            });
        }

        self.rebuild_indexes();
        debug!(%group, x, width, rows = count, "Created item group");
        group
    }

    /// Apply a patch to one item.
    ///
    /// `x` and `width` are group-wide properties and propagate to every
    /// member (width snapped and clamped); `row`, `type` and `data` only
    /// touch the indexed item.
    pub fn update_item(&mut self, index: usize, patch: ItemPatch, config: &EngineConfig) -> TimelineResult<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(TimelineError::ItemOutOfRange { index, len })?;

        if let Some(item_type) = patch.item_type {
            item.item_type = item_type;
        }
        if let Some(data) = patch.data {
            item.data = data;
        }

        let width = patch
            .width
            .map(|w| config.clamp_width(snap(w, config.active_snap_unit())));
        let geometry = GroupGeometry {
            x: patch.x.map(|x| x.max(0.0)),
            width,
            primary_row: patch.row,
        };
        self.update_group(index, geometry);
        Ok(())
    }

    /// Remove a single item record
    pub fn delete_item(&mut self, index: usize) -> TimelineResult<Item> {
        if index >= self.items.len() {
            return Err(TimelineError::ItemOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        self.rebuild_indexes();
        debug!(index, group = %removed.group, "Deleted item");
        Ok(removed)
    }

    /// Remove every member of a group, returning them in collection order
    pub fn delete_group(&mut self, group: &GroupKey) -> TimelineResult<Vec<Item>> {
        if !self.groups.contains_key(group) {
            return Err(TimelineError::UnknownGroup(group.clone()));
        }
        let (removed, kept): (Vec<Item>, Vec<Item>) =
            std::mem::take(&mut self.items).into_iter().partition(|item| &item.group == group);
        self.items = kept;
        self.rebuild_indexes();
        debug!(%group, removed = removed.len(), "Deleted item group");
        Ok(removed)
    }

    // ========================================================================
    // Group geometry
    // ========================================================================

    /// Write geometry to the group of the item at `primary`.
    ///
    /// Returns `false` (and changes nothing) if `primary` is not a valid
    /// index. All members are updated before returning, so readers never
    /// observe a partially moved group.
    pub fn update_group(&mut self, primary: usize, geometry: GroupGeometry) -> bool {
        let Some(group) = self.items.get(primary).map(|item| item.group.clone()) else {
            return false;
        };
        let members = self.groups.get(&group).cloned().unwrap_or_default();
        if members.is_empty() {
            return false;
        }

        let row_changes = geometry
            .primary_row
            .is_some_and(|row| self.items[primary].row != row);
        if row_changes {
            for &index in &members {
                self.spans.remove(&(group.clone(), self.items[index].row));
            }
        }

        for &index in &members {
            let item = &mut self.items[index];
            if let Some(x) = geometry.x {
                item.x = x;
            }
            if let Some(width) = geometry.width {
                item.width = width;
            }
            if index == primary {
                if let Some(row) = geometry.primary_row {
                    item.row = row;
                }
            }
            self.spatial.insert(index, item.x, item.width, item.row);
        }

        if row_changes {
            for &index in &members {
                self.spans.insert((group.clone(), self.items[index].row), index);
            }
        }

        trace!(%group, members = members.len(), ?geometry, "Updated group geometry");
        true
    }

    fn rebuild_indexes(&mut self) {
        self.groups.clear();
        self.spans.clear();
        for (index, item) in self.items.iter().enumerate() {
            self.groups.entry(item.group.clone()).or_default().push(index);
            self.spans.insert((item.group.clone(), item.row), index);
        }
        self.spatial.rebuild(
            self.items
                .iter()
                .enumerate()
                .map(|(index, item)| (index, item.x, item.width, item.row)),
        );
    }
}
