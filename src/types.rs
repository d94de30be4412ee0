//! Core types for the timeline grid.
//!
//! Items live in timeline position units on the horizontal axis and in whole
//! rows on the vertical axis. Pixel geometry only appears at the input edge
//! (see [`crate::input::coords`]).

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Keys
// ============================================================================

/// Opaque identifier used for groups and category rows.
///
/// Serialized untagged so both `3` and `"zone-1"` are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Number(i64),
    Name(String),
}

impl Key {
    /// Numeric value, if this key is a number
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Name(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

/// Key shared by items that move and resize together
pub type GroupKey = Key;

/// Key of a leaf category row
pub type RowKey = Key;

// ============================================================================
// Items
// ============================================================================

/// A block placed on the grid.
///
/// Multi-row blocks are stored as one `Item` per row, all sharing `group`,
/// `x` and `width`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Renderer selector, opaque to the engine
    #[serde(rename = "type")]
    pub item_type: String,
    /// Width in timeline position units
    pub width: f64,
    /// Row index
    pub row: u32,
    /// Left edge in timeline position units
    pub x: f64,
    pub group: GroupKey,
    /// Host payload (labels, colors, ...)
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Item {
    pub fn new(item_type: impl Into<String>, x: f64, width: f64, row: u32, group: impl Into<GroupKey>) -> Self {
        Self {
            item_type: item_type.into(),
            width,
            row,
            x,
            group: group.into(),
            data: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Attach a host payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    /// Right edge in timeline position units
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Partial update for a single item, applied by [`crate::store::ItemStore::update_item`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPatch {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub width: Option<f64>,
    pub row: Option<u32>,
    pub x: Option<f64>,
    pub data: Option<serde_json::Value>,
}

// ============================================================================
// Geometry
// ============================================================================

/// A point in client (window) pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An axis-aligned rectangle in client pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

// ============================================================================
// Gesture Enums
// ============================================================================

/// Which edge of a block a resize gesture grabbed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
}

/// The view dimension a zoom gesture scales.
///
/// `Horizontal` scales column width, `Vertical` scales row height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomAxis {
    Horizontal,
    Vertical,
}
