//! View transformations - wheel zoom and pinch zoom.
//!
//! Both scale one axis at a time: `Horizontal` changes the column width,
//! `Vertical` the row height. Results are clamped to the configured
//! [`ZoomLimits`](crate::config::ZoomLimits).

use crate::constants::{MIN_PINCH_DISTANCE, WHEEL_LINE_PIXELS, WHEEL_PAGE_PIXELS};
use crate::input::engine::{EventOutcome, InteractionContext, InteractionEngine};
use crate::input::event::{DeltaMode, RawPointerEvent, WheelEvent};
use crate::input::state::{GestureState, PinchState};
use crate::profile_scope;
use crate::types::{Point, ZoomAxis};
use tracing::{debug, trace, warn};

/// Wheel delta in pixels, sign flipped so scrolling up zooms in
pub fn normalized_wheel_delta(delta_y: f64, mode: DeltaMode) -> f64 {
    match mode {
        DeltaMode::Pixel => -delta_y,
        DeltaMode::Line => -delta_y * WHEEL_LINE_PIXELS,
        DeltaMode::Page => -delta_y * WHEEL_PAGE_PIXELS,
    }
}

/// Multiplicative zoom step for a normalized wheel delta
#[inline]
pub fn wheel_zoom_factor(delta: f64, sensitivity: f64) -> f64 {
    1.0 + (delta * sensitivity) / 1000.0
}

/// Axis a two-finger gesture locks to: horizontal iff the fingers are
/// further apart horizontally than vertically.
pub fn pinch_axis(a: Point, b: Point) -> ZoomAxis {
    if (b.x - a.x).abs() > (b.y - a.y).abs() {
        ZoomAxis::Horizontal
    } else {
        ZoomAxis::Vertical
    }
}

impl InteractionEngine {
    /// Handle a wheel event.
    ///
    /// Only zooms while the platform zoom modifier is held; plain wheel
    /// events are left to native scrolling. Ignored during any gesture.
    pub fn handle_wheel(&mut self, wheel: &WheelEvent, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        profile_scope!("handle_wheel");

        if !wheel.modifiers.zoom() {
            return EventOutcome::Ignored;
        }
        if !self.gesture.is_idle() {
            debug!(gesture = self.gesture.name(), "Wheel zoom ignored during gesture");
            return EventOutcome::Ignored;
        }

        let delta = normalized_wheel_delta(wheel.delta_y, wheel.delta_mode);
        let factor = wheel_zoom_factor(delta, self.config.zoom.wheel_sensitivity);
        let axis = if wheel.modifiers.shift {
            ZoomAxis::Horizontal
        } else {
            ZoomAxis::Vertical
        };

        let current = match axis {
            ZoomAxis::Horizontal => ctx.view.column_width,
            ZoomAxis::Vertical => ctx.view.row_height,
        };
        self.apply_zoom(axis, current * factor, ctx);
        EventOutcome::Handled
    }

    /// Two fingers down: lock the axis and remember the base sizes
    pub(crate) fn begin_pinch(&mut self, raw: &RawPointerEvent, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        let [a, b] = match raw.touches.as_slice() {
            [a, b] => [*a, *b],
            _ => return EventOutcome::Ignored,
        };
        if self.gesture.is_editing() {
            return EventOutcome::Ignored;
        }

        // A second finger is never part of a tap
        self.click = None;

        let distance = a.distance(&b);
        if distance < MIN_PINCH_DISTANCE {
            warn!(distance, "Pinch started with coincident touches, ignoring");
            self.end_gesture(ctx.viewport);
            return EventOutcome::Ignored;
        }

        let state = PinchState {
            initial_distance: distance,
            initial_row_height: ctx.view.row_height,
            initial_column_width: ctx.view.column_width,
            locked_axis: pinch_axis(a, b),
        };
        debug!(distance, axis = ?state.locked_axis, "Pinch started");
        self.set_gesture(GestureState::Pinching(state), ctx.viewport);
        EventOutcome::Handled
    }

    pub(crate) fn pinch_move(&mut self, raw: &RawPointerEvent, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        profile_scope!("pinch_move");

        let Some(pinch) = self.gesture.pinch().copied() else {
            return EventOutcome::Ignored;
        };
        let [a, b] = match raw.touches.as_slice() {
            [a, b] => [*a, *b],
            _ => return EventOutcome::Ignored,
        };

        let scale = a.distance(&b) / pinch.initial_distance;
        let base = match pinch.locked_axis {
            ZoomAxis::Horizontal => pinch.initial_column_width,
            ZoomAxis::Vertical => pinch.initial_row_height,
        };
        trace!(scale, "Pinch move");
        self.apply_zoom(pinch.locked_axis, base * scale, ctx);
        EventOutcome::Handled
    }

    /// Clamp and write one view dimension, notifying the host on change
    fn apply_zoom(&self, axis: ZoomAxis, value: f64, ctx: &mut InteractionContext<'_>) {
        let limits = &self.config.zoom;
        let slot = match axis {
            ZoomAxis::Horizontal => &mut ctx.view.column_width,
            ZoomAxis::Vertical => &mut ctx.view.row_height,
        };
        let clamped = match axis {
            ZoomAxis::Horizontal => limits.clamp_column_width(value),
            ZoomAxis::Vertical => limits.clamp_row_height(value),
        };
        if *slot == clamped {
            return;
        }
        *slot = clamped;
        trace!(?axis, value = clamped, "Zoom applied");
        ctx.listener.on_view_change(ctx.view);
    }
}
