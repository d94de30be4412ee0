//! One-finger panning of the viewport.

use crate::input::engine::{EventOutcome, InteractionContext, InteractionEngine};
use crate::input::event::PointerEvent;
use crate::input::state::{GestureState, PanState};
use crate::profile_scope;
use crate::types::Point;
use crate::view::ScrollOffset;
use tracing::trace;

impl InteractionEngine {
    /// Single finger down on the background.
    ///
    /// Records the scroll offsets to pan from and a pending tap. Ignored
    /// while a block is being edited.
    pub(crate) fn begin_pan(&mut self, event: &PointerEvent<'_>, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        if self.gesture.is_editing() {
            return EventOutcome::Ignored;
        }

        self.record_click(event);
        let state = PanState {
            start: event.client,
            start_scroll: ctx.viewport.scroll_offset(),
        };
        self.set_gesture(GestureState::Panning(state), ctx.viewport);
        EventOutcome::Handled
    }

    pub(crate) fn pan_move(&mut self, client: Point, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        profile_scope!("pan_move");

        let Some(pan) = self.gesture.pan() else {
            return EventOutcome::Ignored;
        };

        let offset = ScrollOffset::new(
            pan.start_scroll.left + (pan.start.x - client.x),
            pan.start_scroll.top + (pan.start.y - client.y),
        );
        trace!(left = offset.left, top = offset.top, "Pan move");
        ctx.viewport.set_scroll_offset(offset);
        EventOutcome::Handled
    }
}
