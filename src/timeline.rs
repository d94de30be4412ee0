//! Timeline facade.
//!
//! Owns the item store, view parameters, row model and interaction engine,
//! and builds the per-call [`InteractionContext`] from the host's viewport
//! and listener.

use crate::config::EngineConfig;
use crate::error::TimelineResult;
use crate::input::{EventOutcome, InteractionContext, InteractionEngine, RawPointerEvent, TimelineListener, WheelEvent};
use crate::rows::RowModel;
use crate::store::{ItemStore, NewItem};
use crate::types::{GroupKey, Item, ItemPatch, Point};
use crate::view::{ViewParams, Viewport};
use tracing::info;

/// A grid of items plus the engine that edits them.
pub struct Timeline {
    items: ItemStore,
    view: ViewParams,
    rows: RowModel,
    engine: InteractionEngine,
}

impl Timeline {
    pub fn new(config: EngineConfig, view: ViewParams, rows: RowModel, items: Vec<Item>) -> TimelineResult<Self> {
        config.validate()?;
        view.validate()?;
        info!(
            items = items.len(),
            rows = rows.row_count(),
            cols = view.cols,
            "Timeline created"
        );
        Ok(Self {
            items: ItemStore::from_items(items),
            view,
            rows,
            engine: InteractionEngine::new(config),
        })
    }

    pub fn items(&self) -> &[Item] {
        self.items.items()
    }

    pub fn store(&self) -> &ItemStore {
        &self.items
    }

    pub fn view(&self) -> &ViewParams {
        &self.view
    }

    pub fn rows(&self) -> &RowModel {
        &self.rows
    }

    pub fn engine(&self) -> &InteractionEngine {
        &self.engine
    }

    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    pub fn set_config(&mut self, config: EngineConfig) -> TimelineResult<()> {
        self.engine.set_config(config)
    }

    /// Replace the category tree, e.g. after the host reloaded it
    pub fn set_rows(&mut self, rows: RowModel) {
        self.rows = rows;
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Feed one mouse or touch event through the engine.
    ///
    /// `surface_origin` is the client position of the grid's top-left
    /// corner at the time of the event.
    pub fn handle_pointer(
        &mut self,
        raw: &RawPointerEvent,
        surface_origin: Point,
        viewport: &mut dyn Viewport,
        listener: &mut dyn TimelineListener,
    ) -> EventOutcome {
        let mut ctx = InteractionContext {
            items: &mut self.items,
            view: &mut self.view,
            rows: &self.rows,
            surface_origin,
            viewport,
            listener,
        };
        self.engine.handle_pointer(raw, &mut ctx)
    }

    pub fn handle_wheel(
        &mut self,
        wheel: &WheelEvent,
        viewport: &mut dyn Viewport,
        listener: &mut dyn TimelineListener,
    ) -> EventOutcome {
        let mut ctx = InteractionContext {
            items: &mut self.items,
            view: &mut self.view,
            rows: &self.rows,
            surface_origin: Point::default(),
            viewport,
            listener,
        };
        self.engine.handle_wheel(wheel, &mut ctx)
    }

    /// Abort the active gesture (touch cancel, window blur)
    pub fn cancel(&mut self, viewport: &mut dyn Viewport, listener: &mut dyn TimelineListener) -> EventOutcome {
        let mut ctx = InteractionContext {
            items: &mut self.items,
            view: &mut self.view,
            rows: &self.rows,
            surface_origin: Point::default(),
            viewport,
            listener,
        };
        self.engine.cancel(&mut ctx)
    }

    // ========================================================================
    // Item editing
    // ========================================================================

    pub fn create_item(&mut self, params: NewItem) -> GroupKey {
        self.items.create_item(params, self.engine.config())
    }

    pub fn update_item(&mut self, index: usize, patch: ItemPatch) -> TimelineResult<()> {
        self.items.update_item(index, patch, self.engine.config())
    }

    pub fn delete_item(&mut self, index: usize) -> TimelineResult<Item> {
        self.items.delete_item(index)
    }

    pub fn delete_group(&mut self, group: &GroupKey) -> TimelineResult<Vec<Item>> {
        self.items.delete_group(group)
    }

    /// Replace every item; an in-flight gesture keeps running against the
    /// new collection only if its item still sits in the same group
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items.replace_all(items);
    }
}
