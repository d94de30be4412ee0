//! Pointer down handling - pick the gesture a press starts.
//!
//! On a block: remember the pressed block, then resize if the press is
//! within the edge threshold (and resize is enabled), otherwise drag (if
//! enabled). On the background: record a pending tap, and for a single
//! finger start panning. A second finger starts a pinch.

use crate::input::engine::{EventOutcome, InteractionContext, InteractionEngine};
use crate::input::event::{PointerEvent, StruckItem};
use crate::input::resize::detect_edge;
use crate::input::state::ClickState;
use crate::profile_scope;

impl InteractionEngine {
    pub(crate) fn handle_mouse_down(&mut self, event: &PointerEvent<'_>, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        profile_scope!("handle_mouse_down");

        match &event.item {
            Some(struck) => self.begin_item_gesture(event, struck, ctx),
            None => {
                self.record_click(event);
                EventOutcome::Ignored
            }
        }
    }

    pub(crate) fn handle_touch_start(&mut self, event: &PointerEvent<'_>, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        profile_scope!("handle_touch_start");

        // A lone finger means every finger of an earlier pinch has lifted
        if event.raw.touch_count() < 2 {
            self.touch_settling = false;
        }

        match event.raw.touch_count() {
            2 => self.begin_pinch(event.raw, ctx),
            1 => match &event.item {
                Some(struck) => self.begin_item_gesture(event, struck, ctx),
                None => self.begin_pan(event, ctx),
            },
            _ => EventOutcome::Ignored,
        }
    }

    /// Start a resize or drag on the struck block.
    ///
    /// Either one replaces a pending pan before the viewport is touched.
    fn begin_item_gesture(
        &mut self,
        event: &PointerEvent<'_>,
        struck: &StruckItem,
        ctx: &mut InteractionContext<'_>,
    ) -> EventOutcome {
        // Only a release on this same block can click it
        self.click = Some(ClickState {
            down_position: event.position,
            down_row: event.row_index,
            item: Some(struck.index),
        });

        let edge = detect_edge(struck.offset_px, struck.width_px, self.config.resize_threshold_px);

        match edge {
            Some(edge) if self.config.resize_enabled => {
                self.begin_resize(struck, edge, event.position, ctx);
                EventOutcome::Handled
            }
            _ if self.config.drag_enabled => {
                self.begin_drag(struck, event.position, event.row_index, ctx);
                EventOutcome::Handled
            }
            _ => {
                if self.gesture.is_panning() {
                    self.end_gesture(ctx.viewport);
                }
                EventOutcome::Ignored
            }
        }
    }

    /// Remember a background press as a potential tap
    pub(crate) fn record_click(&mut self, event: &PointerEvent<'_>) {
        if self.gesture.is_editing() {
            return;
        }
        self.click = Some(ClickState {
            down_position: event.position,
            down_row: event.row_index,
            item: None,
        });
    }
}
