//! The interaction engine: entry points, context and host callbacks.

use crate::config::EngineConfig;
use crate::error::TimelineResult;
use crate::input::event::{NormalizeContext, PointerPhase, PointerSource, RawPointerEvent, normalize};
use crate::input::state::{ClickState, GestureState, LockChange};
use crate::profile_scope;
use crate::rows::RowModel;
use crate::store::{GroupGeometry, ItemStore};
use crate::types::{GroupKey, Item, Point, RowKey};
use crate::view::{ViewParams, Viewport};
use serde::Serialize;
use tracing::debug;

/// Payload of a background tap
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineClick {
    pub position: f64,
    pub row_index: i64,
    pub row_key: Option<RowKey>,
}

/// Payload of a tap on a block
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemClick {
    pub position: f64,
    pub row_index: i64,
    pub row_key: Option<RowKey>,
    pub item: Item,
    pub item_index: usize,
}

/// Host callbacks. Every method defaults to a no-op.
pub trait TimelineListener {
    /// Called after each committed change to item geometry
    fn on_items_change(&mut self, _items: &[Item]) {}

    fn on_background_click(&mut self, _click: &TimelineClick) {}

    fn on_item_click(&mut self, _click: &ItemClick) {}

    /// Called after zoom changed the row height or column width
    fn on_view_change(&mut self, _view: &ViewParams) {}
}

impl TimelineListener for () {}

/// Whether the engine used an event.
///
/// On `Handled` the host should suppress the platform default (native
/// scrolling, text selection, browser zoom).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventOutcome {
    Handled,
    Ignored,
}

impl EventOutcome {
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

/// Everything one handler call may read or mutate.
pub struct InteractionContext<'a> {
    pub items: &'a mut ItemStore,
    pub view: &'a mut ViewParams,
    pub rows: &'a RowModel,
    /// Client position of the grid's top-left corner
    pub surface_origin: Point,
    pub viewport: &'a mut dyn Viewport,
    pub listener: &'a mut dyn TimelineListener,
}

impl InteractionContext<'_> {
    fn normalize_context(&self) -> NormalizeContext<'_> {
        NormalizeContext {
            view: &*self.view,
            rows: self.rows,
            items: &*self.items,
            surface_origin: self.surface_origin,
        }
    }
}

/// Routes normalized input to the drag, resize, pan, zoom and click logic.
///
/// Handlers live in sibling modules:
/// - `mouse_down` - pointer down, gesture selection
/// - `drag` - pointer move routing and block dragging
/// - `resize` - edge detection and resizing
/// - `pan` - one-finger viewport scrolling
/// - `transform` - wheel and pinch zoom
/// - `mouse_up` - gesture completion and click disambiguation
#[derive(Debug, Default)]
pub struct InteractionEngine {
    pub(crate) config: EngineConfig,
    pub(crate) gesture: GestureState,
    pub(crate) click: Option<ClickState>,
    /// Fingers from a finished pinch are still down
    pub(crate) touch_settling: bool,
}

impl InteractionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            gesture: GestureState::Idle,
            click: None,
            touch_settling: false,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Swap the configuration; takes effect from the next event
    pub fn set_config(&mut self, config: EngineConfig) -> TimelineResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn click_state(&self) -> Option<&ClickState> {
        self.click.as_ref()
    }

    /// Returns true when no gesture or tap is in progress and no finger
    /// of a finished pinch is still down
    pub fn is_idle(&self) -> bool {
        self.gesture.is_idle() && self.click.is_none() && !self.touch_settling
    }

    /// Handle a mouse or touch event.
    pub fn handle_pointer(&mut self, raw: &RawPointerEvent, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        profile_scope!("handle_pointer");

        if raw.phase == PointerPhase::Cancel {
            return self.cancel(ctx);
        }

        let Some(event) = normalize(raw, &ctx.normalize_context()) else {
            // A final touch-end without coordinates still has to finish the gesture
            if raw.phase == PointerPhase::Up && raw.primary_point().is_none() {
                return self.cancel(ctx);
            }
            return EventOutcome::Ignored;
        };

        match (raw.source, raw.phase) {
            (_, PointerPhase::Move) => self.handle_pointer_move(&event, ctx),
            (PointerSource::Mouse, PointerPhase::Down) => self.handle_mouse_down(&event, ctx),
            (PointerSource::Touch, PointerPhase::Down) => self.handle_touch_start(&event, ctx),
            (PointerSource::Mouse, _) => self.handle_mouse_up(&event, ctx),
            (PointerSource::Touch, _) => self.handle_touch_end(&event, ctx),
        }
    }

    /// Abort whatever is in progress (touch cancel, focus loss).
    ///
    /// No click fires and the scroll lock is released if held.
    pub fn cancel(&mut self, ctx: &mut InteractionContext<'_>) -> EventOutcome {
        let had_work = !self.is_idle();
        self.click = None;
        self.touch_settling = false;
        self.end_gesture(ctx.viewport);
        if had_work {
            debug!("Gesture cancelled");
            EventOutcome::Handled
        } else {
            EventOutcome::Ignored
        }
    }

    // ========================================================================
    // Shared helpers
    // ========================================================================

    /// Enter `next`, applying the scroll lock change it implies
    pub(crate) fn set_gesture(&mut self, next: GestureState, viewport: &mut dyn Viewport) -> GestureState {
        let to = next.name();
        let (previous, lock) = self.gesture.transition(next);
        apply_lock(lock, viewport);
        if previous.name() != to {
            debug!(from = previous.name(), to, "Gesture transition");
        }
        previous
    }

    /// Return to Idle, releasing the scroll lock if the gesture held it
    pub(crate) fn end_gesture(&mut self, viewport: &mut dyn Viewport) -> GestureState {
        self.set_gesture(GestureState::Idle, viewport)
    }

    /// Write geometry to the group of `primary` and notify the host.
    ///
    /// Skipped when nothing would change, so `on_items_change` only fires
    /// for real mutations.
    pub(crate) fn commit_group(
        &self,
        primary: usize,
        geometry: GroupGeometry,
        ctx: &mut InteractionContext<'_>,
    ) -> EventOutcome {
        let Some(current) = ctx.items.get(primary) else {
            return EventOutcome::Ignored;
        };
        let unchanged = geometry.x.is_none_or(|x| x == current.x)
            && geometry.width.is_none_or(|width| width == current.width)
            && geometry.primary_row.is_none_or(|row| row == current.row);
        if unchanged {
            return EventOutcome::Handled;
        }

        if ctx.items.update_group(primary, geometry) {
            ctx.listener.on_items_change(ctx.items.items());
        }
        EventOutcome::Handled
    }
}

fn apply_lock(lock: LockChange, viewport: &mut dyn Viewport) {
    match lock {
        LockChange::Acquire => viewport.set_scroll_locked(true),
        LockChange::Release => viewport.set_scroll_locked(false),
        LockChange::Keep => {}
    }
}

/// True if the block at `index` still belongs to `group`.
///
/// Guards gestures against the host deleting or reordering items mid-drag.
pub(crate) fn still_in_group(items: &ItemStore, index: usize, group: &GroupKey) -> bool {
    items.get(index).is_some_and(|item| &item.group == group)
}
