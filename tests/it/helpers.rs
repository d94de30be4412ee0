//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestTimelineBuilder` - Builder pattern for creating test timelines with items
//! - `Harness` - a timeline wired to an in-memory viewport and a recording listener
//! - Pointer helpers that take grid coordinates instead of pixels
//!
//! The default grid has 10 columns of 100px over 1000 position units, so one
//! unit is one pixel, and rows are 40px high. `row_y(r)` is the middle of row `r`.

use timegrid::{
    CategoryRow, EngineConfig, EventOutcome, Item, ItemClick, Key, Point, PointerPhase, PointerTarget, RawPointerEvent,
    RowModel, ScrollOffset, ScrollViewport, Timeline, TimelineClick, TimelineListener, ViewParams, WheelEvent,
};
use timegrid::input::Modifiers;

pub const ROW_HEIGHT: f64 = 40.0;

/// Vertical pixel in the middle of `row`
pub fn row_y(row: u32) -> f64 {
    f64::from(row) * ROW_HEIGHT + ROW_HEIGHT / 2.0
}

pub fn on_item(index: usize) -> PointerTarget {
    PointerTarget::Item { index, bounds: None }
}

// ============================================================================
// RecordingListener
// ============================================================================

/// Listener that keeps every callback for later assertions.
#[derive(Default)]
pub struct RecordingListener {
    pub item_changes: usize,
    pub background_clicks: Vec<TimelineClick>,
    pub item_clicks: Vec<ItemClick>,
    pub view_changes: Vec<ViewParams>,
}

impl TimelineListener for RecordingListener {
    fn on_items_change(&mut self, _items: &[Item]) {
        self.item_changes += 1;
    }

    fn on_background_click(&mut self, click: &TimelineClick) {
        self.background_clicks.push(click.clone());
    }

    fn on_item_click(&mut self, click: &ItemClick) {
        self.item_clicks.push(click.clone());
    }

    fn on_view_change(&mut self, view: &ViewParams) {
        self.view_changes.push(view.clone());
    }
}

// ============================================================================
// TestTimelineBuilder
// ============================================================================

/// Builder for test timelines.
///
/// # Example
/// ```ignore
/// let mut h = TestTimelineBuilder::new()
///     .with_item(100.0, 200.0, 1, 0)
///     .with_snap(25.0)
///     .build();
/// ```
pub struct TestTimelineBuilder {
    items: Vec<Item>,
    config: EngineConfig,
    view: ViewParams,
    row_count: u32,
    viewport: ScrollViewport,
}

impl Default for TestTimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimelineBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            config: EngineConfig::default(),
            view: ViewParams::new(10, 100.0),
            row_count: 10,
            viewport: ScrollViewport::new(),
        }
    }

    /// Add a single-row item.
    pub fn with_item(mut self, x: f64, width: f64, row: u32, group: i64) -> Self {
        self.items.push(Item::new("default", x, width, row, group));
        self
    }

    /// Add one record per row for a block spanning `rows`.
    pub fn with_spanning_item(mut self, x: f64, width: f64, rows: std::ops::Range<u32>, group: i64) -> Self {
        for row in rows {
            self.items.push(Item::new("default", x, width, row, group));
        }
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_snap(mut self, unit: f64) -> Self {
        self.config.snap_unit = Some(unit);
        self
    }

    pub fn with_view(mut self, view: ViewParams) -> Self {
        self.view = view;
        self
    }

    pub fn with_scroll(mut self, left: f64, top: f64) -> Self {
        self.viewport.offset = ScrollOffset::new(left, top);
        self
    }

    pub fn build(self) -> Harness {
        let rows: Vec<CategoryRow> = (0..self.row_count)
            .map(|i| CategoryRow::leaf(format!("row {i}"), i64::from(i)))
            .collect();
        let timeline = Timeline::new(self.config, self.view, RowModel::from_categories(&rows), self.items)
            .expect("valid test timeline");
        Harness {
            timeline,
            viewport: self.viewport,
            listener: RecordingListener::default(),
            origin: Point::default(),
        }
    }
}

// ============================================================================
// Harness
// ============================================================================

/// A timeline plus the host-side state a real embedding would own.
pub struct Harness {
    pub timeline: Timeline,
    pub viewport: ScrollViewport,
    pub listener: RecordingListener,
    pub origin: Point,
}

impl Harness {
    pub fn send(&mut self, raw: RawPointerEvent) -> EventOutcome {
        self.timeline
            .handle_pointer(&raw, self.origin, &mut self.viewport, &mut self.listener)
    }

    pub fn mouse_down(&mut self, x: f64, y: f64, target: PointerTarget) -> EventOutcome {
        self.send(RawPointerEvent::mouse(PointerPhase::Down, Point::new(x, y), target))
    }

    pub fn mouse_move(&mut self, x: f64, y: f64, target: PointerTarget) -> EventOutcome {
        self.send(RawPointerEvent::mouse(PointerPhase::Move, Point::new(x, y), target))
    }

    pub fn mouse_up(&mut self, x: f64, y: f64, target: PointerTarget) -> EventOutcome {
        self.send(RawPointerEvent::mouse(PointerPhase::Up, Point::new(x, y), target))
    }

    pub fn touch_start(&mut self, touches: &[(f64, f64)], target: PointerTarget) -> EventOutcome {
        self.send(RawPointerEvent::touch(PointerPhase::Down, points(touches), target))
    }

    pub fn touch_move(&mut self, touches: &[(f64, f64)], target: PointerTarget) -> EventOutcome {
        self.send(RawPointerEvent::touch(PointerPhase::Move, points(touches), target))
    }

    /// Lift the finger at `lifted`, leaving `remaining` on the surface
    pub fn touch_end(&mut self, remaining: &[(f64, f64)], lifted: (f64, f64), target: PointerTarget) -> EventOutcome {
        self.send(
            RawPointerEvent::touch(PointerPhase::Up, points(remaining), target)
                .with_changed(Point::new(lifted.0, lifted.1)),
        )
    }

    pub fn touch_cancel(&mut self) -> EventOutcome {
        self.send(RawPointerEvent::touch(PointerPhase::Cancel, Vec::new(), PointerTarget::Background))
    }

    pub fn wheel(&mut self, delta_y: f64, modifiers: Modifiers) -> EventOutcome {
        self.timeline
            .handle_wheel(&WheelEvent::pixels(delta_y, modifiers), &mut self.viewport, &mut self.listener)
    }

    pub fn items(&self) -> &[Item] {
        self.timeline.items()
    }

    pub fn item(&self, index: usize) -> &Item {
        &self.timeline.items()[index]
    }
}

fn points(touches: &[(f64, f64)]) -> Vec<Point> {
    touches.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Ctrl held
pub fn ctrl() -> Modifiers {
    Modifiers {
        control: true,
        ..Modifiers::default()
    }
}

/// Ctrl and shift held
pub fn ctrl_shift() -> Modifiers {
    Modifiers {
        control: true,
        shift: true,
        ..Modifiers::default()
    }
}

/// Assert every record of `group` shares the same `x` and `width`.
pub fn assert_group_consistent(items: &[Item], group: i64) {
    let key = Key::from(group);
    let members: Vec<&Item> = items.iter().filter(|i| i.group == key).collect();
    assert!(!members.is_empty(), "group {group} has no members");
    let first = members[0];
    for member in &members {
        assert_eq!(member.x, first.x, "x differs within group {group}");
        assert_eq!(member.width, first.width, "width differs within group {group}");
    }
}
