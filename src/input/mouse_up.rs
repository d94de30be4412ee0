//! Pointer up handling - finish gestures and decide whether a press was a tap.
//!
//! A background tap fires when the press started on the background, no drag
//! or resize ran, the pointer came back up within [`CLICK_POSITION_TOLERANCE`]
//! position units of where it went down, and on the same row. A tap on a
//! block fires when the press started on that same block and neither a
//! resize ran nor the drag moved. Click state is cleared on every pointer up.
//!
//! Fingers left on the surface after a pinch never tap: their touch-ends
//! are swallowed until the last one lifts.

use crate::constants::CLICK_POSITION_TOLERANCE;
use crate::input::engine::{
    EventOutcome, InteractionContext, InteractionEngine, ItemClick, TimelineClick, still_in_group,
};
use crate::input::event::{PointerEvent, StruckItem};
use crate::input::state::ClickState;
use crate::profile_scope;
use tracing::debug;

impl InteractionEngine {
    pub(crate) fn handle_mouse_up(&mut self, event: &PointerEvent<'_>, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        profile_scope!("handle_mouse_up");

        match &event.item {
            Some(struck) => self.finish_item_press(event, struck, ctx),
            None => self.finish_background_press(event, ctx),
        }
    }

    pub(crate) fn handle_touch_end(&mut self, event: &PointerEvent<'_>, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        profile_scope!("handle_touch_end");

        let remaining = event.raw.touch_count();
        if self.gesture.is_pinching() {
            self.click = None;
            if remaining < 2 {
                debug!(remaining, "Pinch ended");
                self.end_gesture(ctx.viewport);
                self.touch_settling = remaining > 0;
            }
            return EventOutcome::Handled;
        }

        if self.touch_settling {
            self.click = None;
            if remaining == 0 {
                self.touch_settling = false;
            }
            return EventOutcome::Handled;
        }

        match &event.item {
            Some(struck) => self.finish_item_press(event, struck, ctx),
            None => self.finish_background_press(event, ctx),
        }
    }

    /// Release over a block: end the edit, then fire the item click if the
    /// press started on this block and neither resized nor moved it.
    fn finish_item_press(
        &mut self,
        event: &PointerEvent<'_>,
        struck: &StruckItem,
        ctx: &mut InteractionContext<'_>,
    ) -> EventOutcome {
        let pending = self.click.take();
        let had_resize = self.gesture.is_resizing();
        let has_moved = self.gesture.drag().is_some_and(|drag| drag.has_moved);
        let previous = self.end_gesture(ctx.viewport);
        if previous.is_editing() {
            debug!(gesture = previous.name(), item = struck.index, "Edit finished");
        }

        if had_resize || has_moved {
            return EventOutcome::Handled;
        }

        // Members of one block share a group, so a press resolved to another
        // row of the same block still counts
        let pressed_here = pending
            .and_then(|click| click.item)
            .is_some_and(|pressed| still_in_group(ctx.items, pressed, &struck.item.group));
        if !pressed_here {
            debug!(
                item = struck.index,
                gesture = previous.name(),
                "Release over a block the press did not start on, no click"
            );
            return if previous.is_idle() {
                EventOutcome::Ignored
            } else {
                EventOutcome::Handled
            };
        }

        let click = ItemClick {
            position: event.position,
            row_index: event.row_index,
            row_key: event.row_key.clone(),
            item: struck.item.clone(),
            item_index: struck.index,
        };
        debug!(item = struck.index, position = click.position, row = click.row_index, "Item click");
        ctx.listener.on_item_click(&click);
        EventOutcome::Handled
    }

    /// Release over the background.
    ///
    /// An active drag or resize ends here and swallows the tap. A touch
    /// pan that travelled past the tolerance is not a tap either.
    fn finish_background_press(&mut self, event: &PointerEvent<'_>, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        let pending = self.click.take();

        if self.gesture.is_editing() {
            let previous = self.end_gesture(ctx.viewport);
            debug!(gesture = previous.name(), "Edit finished over background, click discarded");
            return EventOutcome::Handled;
        }

        let panned = self
            .gesture
            .pan()
            .is_some_and(|pan| pan.start.distance(&event.client) >= CLICK_POSITION_TOLERANCE);
        let previous = self.end_gesture(ctx.viewport);

        match pending {
            Some(click) if click.is_background() && !panned && is_tap(&click, event.position, event.row_index) => {
                let click = TimelineClick {
                    position: event.position,
                    row_index: event.row_index,
                    row_key: event.row_key.clone(),
                };
                debug!(position = click.position, row = click.row_index, "Background click");
                ctx.listener.on_background_click(&click);
                EventOutcome::Handled
            }
            _ if !previous.is_idle() => EventOutcome::Handled,
            _ => EventOutcome::Ignored,
        }
    }
}

/// Same row and within the position tolerance of the press
pub fn is_tap(click: &ClickState, position: f64, row_index: i64) -> bool {
    (position - click.down_position).abs() < CLICK_POSITION_TOLERANCE && row_index == click.down_row
}
