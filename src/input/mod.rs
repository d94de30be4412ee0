//! Pointer, touch and wheel input handling for the grid.
//!
//! ## Architecture
//!
//! Every raw event is first normalized into grid space (`event`), then
//! routed by the explicit gesture state machine (`state`) to exactly one of
//! the drag, resize, pan or zoom handlers, or to the click disambiguation
//! in `mouse_up`.
//!
//! ## Modules
//!
//! - `coords` - client pixels <-> (position, row) mapping
//! - `event` - raw event types and the pointer normalizer
//! - `state` - gesture state machine and click state
//! - `engine` - `InteractionEngine`, context and host callbacks
//! - `mouse_down` - press handling (gesture selection)
//! - `drag` - move routing and block dragging
//! - `resize` - edge detection and block resizing
//! - `pan` - one-finger viewport panning
//! - `transform` - wheel and pinch zoom
//! - `mouse_up` - release handling and tap detection
//! - `snap` - grid snapping

pub mod coords;
mod drag;
pub mod engine;
pub mod event;
#[cfg(feature = "gpui")]
pub mod gpui_events;
mod mouse_down;
mod mouse_up;
mod pan;
pub mod resize;
pub mod snap;
pub mod state;
pub mod transform;

pub use coords::CoordinateMapper;
pub use engine::{EventOutcome, InteractionContext, InteractionEngine, ItemClick, TimelineClick, TimelineListener};
pub use event::{
    DeltaMode, Modifiers, PointerEvent, PointerPhase, PointerSource, PointerTarget, RawPointerEvent, StruckItem,
    WheelEvent,
};
pub use mouse_up::is_tap;
pub use resize::detect_edge;
pub use snap::snap;
pub use state::{ClickState, DragState, GestureState, PanState, PinchState, ResizeState};
