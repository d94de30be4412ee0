//! Category tree flattening and row lookup.
//!
//! Categories nest (zone -> table -> ...). The grid draws one row per entry
//! of the deepest level, so row indices map onto that level.

use crate::types::RowKey;
use serde::{Deserialize, Serialize};

/// A node of the category tree supplied by the host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub name: String,
    pub key: RowKey,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryRow>,
}

impl CategoryRow {
    pub fn leaf(name: impl Into<String>, key: impl Into<RowKey>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<CategoryRow>) -> Self {
        self.children = children;
        self
    }
}

/// One entry of a flattened level
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlattenedRow {
    pub name: String,
    pub key: RowKey,
    /// Key of the category this row is nested in (None at the top level)
    pub parent_key: Option<RowKey>,
    /// Position among its siblings
    pub inner_index: usize,
}

/// Flatten a category tree into per-depth levels.
///
/// Level `n` holds every node at depth `n`, in depth-first order of their
/// ancestors.
pub fn flatten_levels(categories: &[CategoryRow]) -> Vec<Vec<FlattenedRow>> {
    let mut levels = Vec::new();
    collect_level(categories, 0, None, &mut levels);
    levels
}

fn collect_level(
    rows: &[CategoryRow],
    depth: usize,
    parent_key: Option<&RowKey>,
    levels: &mut Vec<Vec<FlattenedRow>>,
) {
    if levels.len() <= depth {
        levels.resize_with(depth + 1, Vec::new);
    }

    for (inner_index, row) in rows.iter().enumerate() {
        levels[depth].push(FlattenedRow {
            name: row.name.clone(),
            key: row.key.clone(),
            parent_key: parent_key.cloned(),
            inner_index,
        });

        if !row.children.is_empty() {
            collect_level(&row.children, depth + 1, Some(&row.key), levels);
        }
    }
}

/// Row lookup over the flattened category levels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowModel {
    levels: Vec<Vec<FlattenedRow>>,
}

impl RowModel {
    pub fn from_categories(categories: &[CategoryRow]) -> Self {
        Self {
            levels: flatten_levels(categories),
        }
    }

    /// A flat list of rows with no nesting
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<RowKey>,
    {
        let rows: Vec<CategoryRow> = keys
            .into_iter()
            .map(|key| {
                let key = key.into();
                CategoryRow::leaf(key.to_string(), key)
            })
            .collect();
        Self::from_categories(&rows)
    }

    pub fn levels(&self) -> &[Vec<FlattenedRow>] {
        &self.levels
    }

    /// Rows of the deepest level, the ones the grid draws
    pub fn leaf_rows(&self) -> &[FlattenedRow] {
        self.levels.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn row_count(&self) -> usize {
        self.leaf_rows().len()
    }

    /// Key of the row at `row_index`, if it is inside the grid
    pub fn row_key(&self, row_index: i64) -> Option<&RowKey> {
        usize::try_from(row_index)
            .ok()
            .and_then(|index| self.leaf_rows().get(index))
            .map(|row| &row.key)
    }
}
