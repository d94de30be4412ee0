//! Touch input: panning, pinch zoom, touch drags and taps.

use crate::helpers::{TestTimelineBuilder, on_item, row_y};
use timegrid::{EventOutcome, PointerTarget, ScrollOffset, Viewport, ZoomAxis};

#[test]
fn test_one_finger_pan_scrolls_viewport() {
    let mut h = TestTimelineBuilder::new().with_scroll(100.0, 100.0).build();

    h.touch_start(&[(300.0, 200.0)], PointerTarget::Background);
    assert!(h.timeline.engine().gesture().is_panning());

    h.touch_move(&[(250.0, 170.0)], PointerTarget::Background);
    assert_eq!(h.viewport.scroll_offset(), ScrollOffset::new(150.0, 130.0));

    h.touch_move(&[(320.0, 230.0)], PointerTarget::Background);
    assert_eq!(h.viewport.scroll_offset(), ScrollOffset::new(80.0, 70.0));

    h.touch_end(&[], (320.0, 230.0), PointerTarget::Background);
    assert!(h.timeline.engine().gesture().is_idle());
    // A pan is not a tap
    assert!(h.listener.background_clicks.is_empty());
}

#[test]
fn test_background_touch_tap_fires_click() {
    let mut h = TestTimelineBuilder::new().build();

    h.touch_start(&[(300.0, row_y(2))], PointerTarget::Background);
    h.touch_end(&[], (301.0, row_y(2)), PointerTarget::Background);

    assert_eq!(h.listener.background_clicks.len(), 1);
    assert_eq!(h.listener.background_clicks[0].position, 301.0);
    assert_eq!(h.viewport.scroll_offset(), ScrollOffset::default());
}

#[test]
fn test_resize_start_clears_pan_before_any_scroll() {
    let mut h = TestTimelineBuilder::new()
        .with_item(100.0, 200.0, 1, 0)
        .with_scroll(50.0, 50.0)
        .build();

    h.touch_start(&[(600.0, row_y(6))], PointerTarget::Background);
    assert!(h.timeline.engine().gesture().is_panning());

    h.touch_start(&[(295.0, row_y(1))], on_item(0));
    assert!(h.timeline.engine().gesture().is_resizing());
    assert!(h.viewport.is_scroll_locked());

    h.touch_move(&[(320.0, row_y(1))], on_item(0));
    assert_eq!(h.item(0).width, 225.0);
    assert_eq!(h.viewport.scroll_offset(), ScrollOffset::new(50.0, 50.0));
}

#[test]
fn test_pinch_locks_horizontal_axis() {
    let mut h = TestTimelineBuilder::new().build();

    h.touch_start(&[(0.0, 0.0), (100.0, 10.0)], PointerTarget::Background);
    assert_eq!(
        h.timeline.engine().gesture().pinch().map(|p| p.locked_axis),
        Some(ZoomAxis::Horizontal)
    );

    h.touch_move(&[(0.0, 0.0), (200.0, 20.0)], PointerTarget::Background);
    assert!((h.timeline.view().column_width - 200.0).abs() < 1e-9);
    assert_eq!(h.timeline.view().row_height, 40.0);

    // Mostly vertical motion still scales the locked axis only
    h.touch_move(&[(0.0, 0.0), (30.0, 300.0)], PointerTarget::Background);
    assert_eq!(h.timeline.view().row_height, 40.0);
    assert!(h.timeline.view().column_width > 250.0);
}

#[test]
fn test_pinch_locks_vertical_axis_and_clamps() {
    let mut h = TestTimelineBuilder::new().build();

    h.touch_start(&[(0.0, 0.0), (10.0, 100.0)], PointerTarget::Background);
    h.touch_move(&[(0.0, 0.0), (10.0, 1000.0)], PointerTarget::Background);

    assert_eq!(h.timeline.view().row_height, 100.0);
    assert_eq!(h.timeline.view().column_width, 100.0);
    assert_eq!(h.listener.view_changes.len(), 1);
}

#[test]
fn test_pinch_ends_when_a_finger_lifts() {
    let mut h = TestTimelineBuilder::new().build();

    h.touch_start(&[(0.0, 0.0), (100.0, 10.0)], PointerTarget::Background);
    h.touch_end(&[(0.0, 0.0)], (100.0, 10.0), PointerTarget::Background);
    assert!(h.timeline.engine().gesture().is_idle());

    // The remaining finger neither pans nor zooms
    let outcome = h.touch_move(&[(50.0, 50.0)], PointerTarget::Background);
    assert_eq!(outcome, EventOutcome::Ignored);
    assert_eq!(h.viewport.scroll_offset(), ScrollOffset::default());
    assert_eq!(h.timeline.view().column_width, 100.0);
}

#[test]
fn test_second_finger_turns_pan_into_pinch() {
    let mut h = TestTimelineBuilder::new().build();

    h.touch_start(&[(100.0, 100.0)], PointerTarget::Background);
    h.touch_start(&[(100.0, 100.0), (300.0, 120.0)], PointerTarget::Background);
    assert!(h.timeline.engine().gesture().is_pinching());

    h.touch_move(&[(50.0, 100.0), (300.0, 120.0)], PointerTarget::Background);
    assert_eq!(h.viewport.scroll_offset(), ScrollOffset::default());
    assert!(h.timeline.engine().click_state().is_none());
}

#[test]
fn test_pinch_ignored_during_drag() {
    let mut h = TestTimelineBuilder::new().with_item(100.0, 200.0, 1, 0).build();

    h.touch_start(&[(150.0, row_y(1))], on_item(0));
    let outcome = h.touch_start(&[(150.0, row_y(1)), (400.0, row_y(5))], PointerTarget::Background);

    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(h.timeline.engine().gesture().is_dragging());
}

#[test]
fn test_coincident_pinch_is_ignored() {
    let mut h = TestTimelineBuilder::new().build();

    let outcome = h.touch_start(&[(10.0, 10.0), (10.0, 10.0)], PointerTarget::Background);

    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(h.timeline.engine().gesture().is_idle());
}

#[test]
fn test_touch_drag_then_release_without_click() {
    let mut h = TestTimelineBuilder::new().with_item(100.0, 200.0, 1, 0).build();

    h.touch_start(&[(150.0, row_y(1))], on_item(0));
    h.touch_move(&[(250.0, row_y(2))], on_item(0));
    h.touch_end(&[], (250.0, row_y(2)), on_item(0));

    assert_eq!((h.item(0).x, h.item(0).row), (200.0, 2));
    assert!(h.listener.item_clicks.is_empty());
    assert!(!h.viewport.is_scroll_locked());
}

#[test]
fn test_touch_tap_on_item_fires_click() {
    let mut h = TestTimelineBuilder::new().with_item(100.0, 200.0, 1, 0).build();

    h.touch_start(&[(150.0, row_y(1))], on_item(0));
    h.touch_end(&[], (150.0, row_y(1)), on_item(0));

    assert_eq!(h.listener.item_clicks.len(), 1);
}

#[test]
fn test_cancel_releases_scroll_lock() {
    let mut h = TestTimelineBuilder::new().with_item(100.0, 200.0, 1, 0).build();

    h.touch_start(&[(150.0, row_y(1))], on_item(0));
    assert!(h.viewport.is_scroll_locked());

    assert_eq!(h.touch_cancel(), EventOutcome::Handled);
    assert!(!h.viewport.is_scroll_locked());
    assert!(h.timeline.engine().is_idle());
    assert!(h.listener.item_clicks.is_empty());
}

#[test]
fn test_final_touch_end_without_coordinates_finishes_gesture() {
    let mut h = TestTimelineBuilder::new().with_item(100.0, 200.0, 1, 0).build();

    h.touch_start(&[(150.0, row_y(1))], on_item(0));
    h.send(timegrid::RawPointerEvent::touch(
        timegrid::PointerPhase::Up,
        Vec::new(),
        on_item(0),
    ));

    assert!(h.timeline.engine().gesture().is_idle());
    assert!(!h.viewport.is_scroll_locked());
}

#[test]
fn test_pan_lifted_over_item_does_not_click_it() {
    let mut h = TestTimelineBuilder::new().with_item(100.0, 200.0, 1, 0).build();

    h.touch_start(&[(600.0, row_y(1))], PointerTarget::Background);
    h.touch_move(&[(200.0, row_y(1))], PointerTarget::HitTest);
    let outcome = h.touch_end(&[], (200.0, row_y(1)), PointerTarget::HitTest);

    assert_eq!(outcome, EventOutcome::Handled);
    assert!(h.listener.item_clicks.is_empty());
    assert!(h.listener.background_clicks.is_empty());
    assert!(h.timeline.engine().is_idle());
}

#[test]
fn test_short_background_touch_released_over_item_does_not_click_it() {
    let mut h = TestTimelineBuilder::new().with_item(100.0, 200.0, 1, 0).build();

    h.touch_start(&[(302.0, row_y(1))], PointerTarget::Background);
    h.touch_end(&[], (299.0, row_y(1)), on_item(0));

    assert!(h.listener.item_clicks.is_empty());
    assert!(h.listener.background_clicks.is_empty());
}

#[test]
fn test_pinch_release_over_item_does_not_click_it() {
    let mut h = TestTimelineBuilder::new().with_item(100.0, 200.0, 1, 0).build();

    h.touch_start(&[(150.0, row_y(1)), (400.0, row_y(5))], PointerTarget::Background);
    h.touch_end(&[(150.0, row_y(1))], (400.0, row_y(5)), PointerTarget::Background);
    assert!(h.timeline.engine().gesture().is_idle());
    assert!(!h.timeline.engine().is_idle());

    let outcome = h.touch_end(&[], (150.0, row_y(1)), on_item(0));

    assert_eq!(outcome, EventOutcome::Handled);
    assert!(h.listener.item_clicks.is_empty());
    assert!(h.timeline.engine().is_idle());
}

#[test]
fn test_pinch_release_over_background_does_not_tap() {
    let mut h = TestTimelineBuilder::new().build();

    h.touch_start(&[(300.0, row_y(2)), (600.0, row_y(2))], PointerTarget::Background);
    h.touch_end(&[(300.0, row_y(2))], (600.0, row_y(2)), PointerTarget::Background);
    h.touch_end(&[], (300.0, row_y(2)), PointerTarget::Background);

    assert!(h.listener.background_clicks.is_empty());
}

#[test]
fn test_taps_resume_after_pinch_fingers_lift() {
    let mut h = TestTimelineBuilder::new().with_item(100.0, 200.0, 1, 0).build();

    h.touch_start(&[(150.0, row_y(1)), (400.0, row_y(5))], PointerTarget::Background);
    h.touch_end(&[(150.0, row_y(1))], (400.0, row_y(5)), PointerTarget::Background);
    h.touch_end(&[], (150.0, row_y(1)), on_item(0));

    h.touch_start(&[(150.0, row_y(1))], on_item(0));
    h.touch_end(&[], (150.0, row_y(1)), on_item(0));

    assert_eq!(h.listener.item_clicks.len(), 1);
}
