//! Raw input events and the pointer normalizer.
//!
//! Hosts translate their native mouse and touch events into
//! [`RawPointerEvent`]. [`normalize`] then resolves every event, whatever
//! its source, into one [`PointerEvent`] in grid space.

use crate::input::coords::CoordinateMapper;
use crate::rows::RowModel;
use crate::store::ItemStore;
use crate::types::{Item, Point, Rect, RowKey};
use crate::view::ViewParams;
use serde::{Deserialize, Serialize};
use tracing::warn;

// ============================================================================
// Raw events
// ============================================================================

/// Keyboard modifiers held during an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub control: bool,
    pub alt: bool,
    pub shift: bool,
    /// Command on macOS, Windows key elsewhere
    pub platform: bool,
}

impl Modifiers {
    /// The platform zoom modifier (ctrl or meta) is held
    #[inline]
    pub fn zoom(&self) -> bool {
        self.control || self.platform
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// What the pointer struck, as far as the host knows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PointerTarget {
    /// Empty grid surface
    Background,
    /// A rendered block. `bounds` is its bounding box in client pixels;
    /// derived from the item geometry when absent.
    Item {
        index: usize,
        #[serde(default)]
        bounds: Option<Rect>,
    },
    /// Unknown; resolved by hit testing the item store
    #[default]
    HitTest,
}

/// A pointer event as delivered by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawPointerEvent {
    pub source: PointerSource,
    pub phase: PointerPhase,
    /// Pointers currently down, in client pixels. A mouse event carries its
    /// single position; a touch event lists every finger still in contact
    /// (empty on the last touch-end).
    #[serde(default)]
    pub touches: Vec<Point>,
    /// The finger that was lifted, for touch-end events
    #[serde(default)]
    pub changed: Option<Point>,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub target: PointerTarget,
}

impl RawPointerEvent {
    pub fn mouse(phase: PointerPhase, position: Point, target: PointerTarget) -> Self {
        Self {
            source: PointerSource::Mouse,
            phase,
            touches: vec![position],
            changed: None,
            modifiers: Modifiers::default(),
            target,
        }
    }

    pub fn touch(phase: PointerPhase, touches: Vec<Point>, target: PointerTarget) -> Self {
        Self {
            source: PointerSource::Touch,
            phase,
            touches,
            changed: None,
            modifiers: Modifiers::default(),
            target,
        }
    }

    pub fn with_changed(mut self, changed: Point) -> Self {
        self.changed = Some(changed);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The point the event is about: first active pointer, else the lifted one
    pub fn primary_point(&self) -> Option<Point> {
        self.touches.first().copied().or(self.changed)
    }

    #[inline]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }
}

/// Unit of a wheel delta
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// A wheel or trackpad scroll event
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelEvent {
    pub delta_y: f64,
    #[serde(default)]
    pub delta_mode: DeltaMode,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl WheelEvent {
    pub fn pixels(delta_y: f64, modifiers: Modifiers) -> Self {
        Self {
            delta_y,
            delta_mode: DeltaMode::Pixel,
            modifiers,
        }
    }
}

// ============================================================================
// Normalized events
// ============================================================================

/// The block a pointer event struck, resolved against the store
#[derive(Clone, Debug, PartialEq)]
pub struct StruckItem {
    pub index: usize,
    pub item: Item,
    /// Pointer offset from the block's left edge, in pixels
    pub offset_px: f64,
    /// Rendered block width, in pixels
    pub width_px: f64,
}

/// A pointer event in grid space
#[derive(Clone, Debug)]
pub struct PointerEvent<'r> {
    pub position: f64,
    pub row_index: i64,
    pub row_key: Option<RowKey>,
    pub client: Point,
    pub item: Option<StruckItem>,
    pub raw: &'r RawPointerEvent,
}

impl PointerEvent<'_> {
    #[inline]
    pub fn is_on_item(&self) -> bool {
        self.item.is_some()
    }
}

/// What the normalizer reads from the timeline
pub struct NormalizeContext<'a> {
    pub view: &'a ViewParams,
    pub rows: &'a RowModel,
    pub items: &'a ItemStore,
    pub surface_origin: Point,
}

/// Resolve a raw event into grid space.
///
/// Returns `None` when the event carries no point, or when it names an item
/// index the store does not hold (stale host state); such events are
/// dropped without touching any gesture.
pub fn normalize<'r>(raw: &'r RawPointerEvent, ctx: &NormalizeContext<'_>) -> Option<PointerEvent<'r>> {
    let client = raw.primary_point()?;
    let mapper = CoordinateMapper::new(ctx.view, ctx.surface_origin);
    let (position, row_index) = mapper.client_to_grid(client);

    let struck = match raw.target {
        PointerTarget::Background => None,
        PointerTarget::HitTest => ctx.items.hit_test(position, row_index).map(|index| (index, None)),
        PointerTarget::Item { index, bounds } => {
            if ctx.items.get(index).is_none() {
                warn!(index, len = ctx.items.len(), "Pointer event names an unknown item, ignoring");
                return None;
            }
            Some((index, bounds))
        }
    };

    let item = struck.and_then(|(index, bounds)| {
        let index = resolve_span(ctx.items, index, row_index);
        let item = ctx.items.get(index)?.clone();
        let bounds = bounds.unwrap_or_else(|| mapper.item_bounds(&item));
        Some(StruckItem {
            index,
            offset_px: client.x - bounds.left,
            width_px: bounds.width,
            item,
        })
    });

    Some(PointerEvent {
        position,
        row_index,
        row_key: ctx.rows.row_key(row_index).cloned(),
        client,
        item,
        raw,
    })
}

/// For multi-row blocks the host may report any member as struck; pick the
/// member that actually sits on the pointer's row.
fn resolve_span(items: &ItemStore, index: usize, row_index: i64) -> usize {
    let Some(item) = items.get(index) else {
        return index;
    };
    match u32::try_from(row_index) {
        Ok(row) if row != item.row => items.span_at(&item.group, row).unwrap_or(index),
        _ => index,
    }
}
