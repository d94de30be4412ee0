//! Conversions from gpui window events into the engine's raw input types.
//!
//! gpui reports mouse input only, so every event maps to
//! [`PointerSource::Mouse`]. The host still decides the target, since only
//! it knows which element was under the cursor.

use crate::input::event::{
    DeltaMode, Modifiers, PointerPhase, PointerSource, PointerTarget, RawPointerEvent, WheelEvent,
};
use crate::types::Point;

impl From<gpui::Modifiers> for Modifiers {
    fn from(modifiers: gpui::Modifiers) -> Self {
        Self {
            control: modifiers.control,
            alt: modifiers.alt,
            shift: modifiers.shift,
            platform: modifiers.platform,
        }
    }
}

fn to_point(position: gpui::Point<gpui::Pixels>) -> Point {
    Point::new(f64::from(f32::from(position.x)), f64::from(f32::from(position.y)))
}

fn mouse_event(
    phase: PointerPhase,
    position: gpui::Point<gpui::Pixels>,
    modifiers: gpui::Modifiers,
    target: PointerTarget,
) -> RawPointerEvent {
    RawPointerEvent {
        source: PointerSource::Mouse,
        phase,
        touches: vec![to_point(position)],
        changed: None,
        modifiers: modifiers.into(),
        target,
    }
}

impl RawPointerEvent {
    pub fn from_gpui_mouse_down(event: &gpui::MouseDownEvent, target: PointerTarget) -> Self {
        mouse_event(PointerPhase::Down, event.position, event.modifiers, target)
    }

    pub fn from_gpui_mouse_move(event: &gpui::MouseMoveEvent, target: PointerTarget) -> Self {
        mouse_event(PointerPhase::Move, event.position, event.modifiers, target)
    }

    pub fn from_gpui_mouse_up(event: &gpui::MouseUpEvent, target: PointerTarget) -> Self {
        mouse_event(PointerPhase::Up, event.position, event.modifiers, target)
    }
}

impl From<&gpui::ScrollWheelEvent> for WheelEvent {
    fn from(event: &gpui::ScrollWheelEvent) -> Self {
        // gpui deltas are positive when scrolling up, DOM wheel deltas when scrolling down
        let (delta_y, delta_mode) = match event.delta {
            gpui::ScrollDelta::Pixels(delta) => (-f64::from(f32::from(delta.y)), DeltaMode::Pixel),
            gpui::ScrollDelta::Lines(delta) => (-f64::from(delta.y), DeltaMode::Line),
        };
        Self {
            delta_y,
            delta_mode,
            modifiers: event.modifiers.into(),
        }
    }
}
