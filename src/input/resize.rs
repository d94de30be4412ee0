//! Edge detection and block resizing.
//!
//! A right-edge resize only changes `width`. A left-edge resize moves `x`
//! and `width` together so the right edge stays put; once the block hits
//! the minimum width, the right edge seen at that moment becomes the anchor
//! the block keeps snapping back to until the pointer returns into range.

use crate::input::engine::{EventOutcome, InteractionContext, InteractionEngine, still_in_group};
use crate::input::event::StruckItem;
use crate::input::snap::snap;
use crate::input::state::{GestureState, ResizeState};
use crate::profile_scope;
use crate::store::GroupGeometry;
use crate::types::Edge;
use tracing::{debug, trace, warn};

/// Which edge, if any, a press at `offset_px` inside a block grabs.
///
/// Both offsets are rendered pixels. The left edge wins on blocks narrower
/// than twice the threshold.
pub fn detect_edge(offset_px: f64, width_px: f64, threshold_px: f64) -> Option<Edge> {
    if offset_px < threshold_px {
        Some(Edge::Left)
    } else if offset_px > width_px - threshold_px {
        Some(Edge::Right)
    } else {
        None
    }
}

/// Width limits and snap unit a resize step works with
#[derive(Clone, Copy, Debug)]
pub(crate) struct ResizeLimits {
    pub min_width: f64,
    pub max_width: f64,
    pub unit: Option<f64>,
}

impl ResizeLimits {
    #[inline]
    fn clamp(&self, width: f64) -> f64 {
        width.clamp(self.min_width, self.max_width)
    }
}

/// New `(x, width)` for a left-edge resize moved by `delta`.
///
/// Updates the rebound anchor in `state`.
pub(crate) fn resize_left(state: &mut ResizeState, delta: f64, limits: ResizeLimits) -> (f64, f64) {
    let mut x = state.original_x + delta;
    let mut width = state.original_width - delta;

    // Dragging past the origin eats into the width instead
    if x < 0.0 {
        width += x;
        x = 0.0;
    }
    let right_edge = x + width;

    if width < limits.min_width {
        let anchor = *state.rebound_anchor.get_or_insert(right_edge);
        x = anchor - limits.min_width;
        width = limits.min_width;
    } else if width > limits.max_width {
        x = state.original_x + state.original_width - limits.max_width;
        width = limits.max_width;
        state.rebound_anchor = None;
    } else {
        state.rebound_anchor = None;
    }

    let x = snap(x, limits.unit).max(0.0);
    let width = limits.clamp(snap(width, limits.unit));
    (x, width)
}

/// New width for a right-edge resize moved by `delta`
pub(crate) fn resize_right(state: &ResizeState, delta: f64, limits: ResizeLimits) -> f64 {
    let width = limits.clamp(state.original_width + delta);
    limits.clamp(snap(width, limits.unit))
}

impl InteractionEngine {
    pub(crate) fn begin_resize(
        &mut self,
        struck: &StruckItem,
        edge: Edge,
        start_position: f64,
        ctx: &mut InteractionContext<'_>,
    ) {
        let state = ResizeState {
            item_index: struck.index,
            group: struck.item.group.clone(),
            edge,
            original_x: struck.item.x,
            original_width: struck.item.width,
            start_position,
            rebound_anchor: None,
        };
        debug!(
            item = struck.index,
            group = %state.group,
            ?edge,
            width = state.original_width,
            "Resize started"
        );
        self.set_gesture(GestureState::Resizing(state), ctx.viewport);
    }

    /// Resize the grabbed edge and apply the result to the whole group
    pub(crate) fn resize_move(&mut self, position: f64, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        profile_scope!("resize_move");

        let limits = ResizeLimits {
            min_width: self.config.min_item_width,
            max_width: self.config.max_item_width,
            unit: self.config.active_snap_unit(),
        };
        let Some(resize) = self.gesture.resize_mut() else {
            return EventOutcome::Ignored;
        };

        let index = resize.item_index;
        if !still_in_group(ctx.items, index, &resize.group) {
            warn!(item = index, group = %resize.group, "Resized item no longer in its group, ignoring move");
            return EventOutcome::Ignored;
        }

        let delta = position - resize.start_position;
        let geometry = match resize.edge {
            Edge::Right => GroupGeometry {
                x: None,
                width: Some(resize_right(resize, delta, limits)),
                primary_row: None,
            },
            Edge::Left => {
                let (x, width) = resize_left(resize, delta, limits);
                GroupGeometry {
                    x: Some(x),
                    width: Some(width),
                    primary_row: None,
                }
            }
        };

        trace!(item = index, ?geometry, "Resize move");
        self.commit_group(index, geometry, ctx)
    }
}
