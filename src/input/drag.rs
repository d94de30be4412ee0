//! Pointer move routing and block dragging.
//!
//! ## Performance Notes
//!
//! Move events arrive at display rate for the whole gesture. The router
//! exits early when idle, and a drag writes the group through one
//! incremental store update.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::DRAG_MOVE_THRESHOLD;
use crate::input::engine::{EventOutcome, InteractionContext, InteractionEngine, still_in_group};
use crate::input::event::{PointerEvent, PointerSource, StruckItem};
use crate::input::snap::snap;
use crate::input::state::{DragState, GestureState};
use crate::profile_scope;
use crate::store::GroupGeometry;
use tracing::{debug, trace, warn};

impl InteractionEngine {
    pub(crate) fn handle_pointer_move(&mut self, event: &PointerEvent<'_>, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        profile_scope!("handle_pointer_move");

        match &self.gesture {
            GestureState::Idle => EventOutcome::Ignored,
            GestureState::Resizing(_) => self.resize_move(event.position, ctx),
            GestureState::Dragging(_) => self.drag_move(event.position, event.row_index, ctx),
            GestureState::Panning(_) if event.raw.source == PointerSource::Touch => self.pan_move(event.client, ctx),
            GestureState::Pinching(_) => self.pinch_move(event.raw, ctx),
            GestureState::Panning(_) => EventOutcome::Ignored,
        }
    }

    pub(crate) fn begin_drag(
        &mut self,
        struck: &StruckItem,
        start_position: f64,
        start_row: i64,
        ctx: &mut InteractionContext<'_>,
    ) {
        let state = DragState {
            item_index: struck.index,
            group: struck.item.group.clone(),
            original_x: struck.item.x,
            original_row: struck.item.row,
            start_position,
            start_row,
            has_moved: false,
        };
        debug!(
            item = struck.index,
            group = %state.group,
            x = state.original_x,
            row = state.original_row,
            "Drag started"
        );
        self.set_gesture(GestureState::Dragging(state), ctx.viewport);
    }

    /// Move the dragged block.
    ///
    /// Every group member takes the new `x`; only the dragged record takes
    /// the new row.
    pub(crate) fn drag_move(&mut self, position: f64, row_index: i64, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        profile_scope!("drag_move");

        let unit = self.config.active_snap_unit();
        let Some(drag) = self.gesture.drag_mut() else {
            return EventOutcome::Ignored;
        };

        let delta_position = position - drag.start_position;
        let delta_row = row_index - drag.start_row;
        if delta_position.abs() > DRAG_MOVE_THRESHOLD || delta_row != 0 {
            drag.has_moved = true;
        }

        let x = snap((drag.original_x + delta_position).max(0.0), unit);
        let row = (i64::from(drag.original_row) + delta_row).max(0);
        let row = u32::try_from(row).unwrap_or(u32::MAX);
        let index = drag.item_index;

        if !still_in_group(ctx.items, index, &drag.group) {
            warn!(item = index, group = %drag.group, "Dragged item no longer in its group, ignoring move");
            return EventOutcome::Ignored;
        }

        trace!(item = index, x, row, "Drag move");
        let geometry = GroupGeometry {
            x: Some(x),
            width: None,
            primary_row: Some(row),
        };
        self.commit_group(index, geometry, ctx)
    }
}
