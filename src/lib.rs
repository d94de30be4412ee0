//! Interaction engine for a zoomable, pannable timeline grid.
//!
//! Rows are nested categories, columns are time slots, and rectangular
//! items sit on the grid. The engine turns raw mouse, touch and wheel input
//! into grid coordinates and runs the drag, resize, pan and zoom gestures
//! that edit item geometry. Rendering is left to the host.
//!
//! ```ignore
//! let mut timeline = Timeline::new(config, ViewParams::new(24, 300.0), rows, items)?;
//! let outcome = timeline.handle_pointer(&raw, surface_origin, &mut viewport, &mut listener);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod perf;
pub mod rows;
pub mod spatial_index;
pub mod store;
pub mod timeline;
pub mod types;
pub mod view;

pub use config::{EngineConfig, ZoomLimits};
pub use error::{TimelineError, TimelineResult};
pub use input::{
    EventOutcome, InteractionContext, InteractionEngine, ItemClick, PointerPhase, PointerSource, PointerTarget,
    RawPointerEvent, TimelineClick, TimelineListener, WheelEvent,
};
pub use rows::{CategoryRow, RowModel};
pub use store::{ItemStore, NewItem};
pub use timeline::Timeline;
pub use types::{Edge, GroupKey, Item, ItemPatch, Key, Point, Rect, RowKey, ZoomAxis};
pub use view::{ScrollOffset, ScrollViewport, ViewParams, Viewport};
