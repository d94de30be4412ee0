//! Gesture state machine.
//!
//! One tagged enum holds whichever gesture is active, so drag, resize, pan
//! and pinch can never run at the same time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging      (pointer down on a block body, drag enabled)
//! Idle -> Resizing      (pointer down near a block edge, resize enabled)
//! Idle -> Panning       (one finger down on the background)
//! Idle -> Pinching      (two fingers down, no drag/resize active)
//! Panning -> Dragging   (finger down on a block cancels the pan)
//! Panning -> Resizing
//! Panning -> Pinching   (second finger)
//!
//! Any -> Idle           (pointer up, touch end, touch cancel)
//! ```
//!
//! Dragging and Resizing hold the viewport's scroll lock; every transition
//! into or out of them goes through [`GestureState::transition`], which
//! reports whether the lock must be taken or released.
//!
//! Click state lives beside the gesture (see [`ClickState`]) because a tap
//! is pending while the gesture is `Idle`, `Panning` or an unmoved drag.

use crate::types::{Edge, GroupKey, Point, ZoomAxis};
use crate::view::ScrollOffset;

/// A block being moved
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    pub item_index: usize,
    /// Group of the dragged block when the gesture started
    pub group: GroupKey,
    pub original_x: f64,
    pub original_row: u32,
    pub start_position: f64,
    pub start_row: i64,
    /// Set once the pointer moved past the drag threshold or changed row
    pub has_moved: bool,
}

/// A block being resized from one edge
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeState {
    pub item_index: usize,
    pub group: GroupKey,
    pub edge: Edge,
    pub original_x: f64,
    pub original_width: f64,
    pub start_position: f64,
    /// Right edge to hold fixed while a left-edge resize is below the minimum
    pub rebound_anchor: Option<f64>,
}

/// A one-finger scroll of the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanState {
    pub start: Point,
    pub start_scroll: ScrollOffset,
}

/// A two-finger zoom
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchState {
    pub initial_distance: f64,
    pub initial_row_height: f64,
    pub initial_column_width: f64,
    pub locked_axis: ZoomAxis,
}

/// A pending tap: where the press went down and what it struck.
///
/// A release only counts as a tap on the target the press started on,
/// so a background press never clicks a block and vice versa.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickState {
    pub down_position: f64,
    pub down_row: i64,
    /// Store index of the pressed block, `None` for the background
    pub item: Option<usize>,
}

impl ClickState {
    #[inline]
    pub fn is_background(&self) -> bool {
        self.item.is_none()
    }
}

/// The active gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragState),
    Resizing(ResizeState),
    Panning(PanState),
    Pinching(PinchState),
}

/// Scroll lock change a transition requires from the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockChange {
    Acquire,
    Release,
    Keep,
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning(_))
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching(_))
    }

    /// Returns true while a block is being dragged or resized
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Dragging(_) | Self::Resizing(_))
    }

    /// Gestures that own the viewport's scroll lock
    pub fn holds_scroll_lock(&self) -> bool {
        self.is_editing()
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "dragging",
            Self::Resizing(_) => "resizing",
            Self::Panning(_) => "panning",
            Self::Pinching(_) => "pinching",
        }
    }

    pub fn drag(&self) -> Option<&DragState> {
        match self {
            Self::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn drag_mut(&mut self) -> Option<&mut DragState> {
        match self {
            Self::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn resize(&self) -> Option<&ResizeState> {
        match self {
            Self::Resizing(resize) => Some(resize),
            _ => None,
        }
    }

    pub fn resize_mut(&mut self) -> Option<&mut ResizeState> {
        match self {
            Self::Resizing(resize) => Some(resize),
            _ => None,
        }
    }

    pub fn pan(&self) -> Option<&PanState> {
        match self {
            Self::Panning(pan) => Some(pan),
            _ => None,
        }
    }

    pub fn pinch(&self) -> Option<&PinchState> {
        match self {
            Self::Pinching(pinch) => Some(pinch),
            _ => None,
        }
    }

    /// Index of the block a drag or resize is editing
    pub fn edited_item(&self) -> Option<usize> {
        match self {
            Self::Dragging(drag) => Some(drag.item_index),
            Self::Resizing(resize) => Some(resize.item_index),
            _ => None,
        }
    }

    /// Replace the state, returning the previous one and the lock change
    /// the caller must apply to the viewport.
    pub fn transition(&mut self, next: GestureState) -> (GestureState, LockChange) {
        let lock = match (self.holds_scroll_lock(), next.holds_scroll_lock()) {
            (false, true) => LockChange::Acquire,
            (true, false) => LockChange::Release,
            _ => LockChange::Keep,
        };
        (std::mem::replace(self, next), lock)
    }

    /// Back to Idle; see [`GestureState::transition`]
    pub fn reset(&mut self) -> (GestureState, LockChange) {
        self.transition(Self::Idle)
    }
}
