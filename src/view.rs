//! View parameters and the scrollable viewport handle.
//!
//! [`ViewParams`] is the zoom state of the grid. The [`Viewport`] trait is
//! how gestures reach the host's scroll container: it is passed explicitly
//! into every handler call and only the gesture holding the scroll lock (or
//! an active pan) writes to it.

use crate::constants::{DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
use crate::error::{TimelineError, TimelineResult};
use serde::{Deserialize, Serialize};

/// Grid dimensions that drive the position <-> pixel mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewParams {
    pub row_height: f64,
    pub column_width: f64,
    pub cols: u32,
    /// Width of the whole timeline in position units
    pub timeline_width: f64,
}

impl ViewParams {
    /// A grid whose logical width is fixed by the initial column width.
    ///
    /// Zooming later changes `column_width` but not `timeline_width`, so
    /// positions stay stable while pixels per unit change.
    pub fn new(cols: u32, initial_column_width: f64) -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            column_width: initial_column_width,
            cols,
            timeline_width: initial_column_width * f64::from(cols),
        }
    }

    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// Check that every dimension is positive and finite.
    ///
    /// `scale()` divides by `timeline_width` and row lookup by `row_height`,
    /// so a zero or NaN here would turn every pointer position into NaN.
    pub fn validate(&self) -> TimelineResult<()> {
        let dimensions = [
            ("rowHeight", self.row_height),
            ("columnWidth", self.column_width),
            ("timelineWidth", self.timeline_width),
        ];
        for (name, value) in dimensions {
            if !(value.is_finite() && value > 0.0) {
                return Err(TimelineError::InvalidView(format!("{name} must be positive, got {value}")));
            }
        }
        if self.cols == 0 {
            return Err(TimelineError::InvalidView("cols must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Rendered pixels per timeline position unit
    #[inline]
    pub fn scale(&self) -> f64 {
        (self.column_width * f64::from(self.cols)) / self.timeline_width
    }

    /// Rendered width of the whole grid in pixels
    #[inline]
    pub fn pixel_width(&self) -> f64 {
        self.column_width * f64::from(self.cols)
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        Self::new(24, DEFAULT_COLUMN_WIDTH)
    }
}

/// Scroll offsets of the viewport in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

impl ScrollOffset {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Host scroll container.
///
/// While locked, the host must stop native scrolling and touch panning so
/// the pointer drives only the active drag or resize.
pub trait Viewport {
    fn scroll_offset(&self) -> ScrollOffset;

    fn set_scroll_offset(&mut self, offset: ScrollOffset);

    fn set_scroll_locked(&mut self, locked: bool);

    fn is_scroll_locked(&self) -> bool;
}

/// In-memory viewport with optional scroll limits.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollViewport {
    pub offset: ScrollOffset,
    pub locked: bool,
    /// Largest reachable offset; `None` leaves the axis unbounded
    pub max_offset: Option<ScrollOffset>,
}

impl ScrollViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_left: f64, max_top: f64) -> Self {
        Self {
            max_offset: Some(ScrollOffset::new(max_left, max_top)),
            ..Self::default()
        }
    }
}

impl Viewport for ScrollViewport {
    fn scroll_offset(&self) -> ScrollOffset {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: ScrollOffset) {
        self.offset = match self.max_offset {
            Some(max) => ScrollOffset::new(
                offset.left.clamp(0.0, max.left.max(0.0)),
                offset.top.clamp(0.0, max.top.max(0.0)),
            ),
            None => ScrollOffset::new(offset.left.max(0.0), offset.top.max(0.0)),
        };
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    fn is_scroll_locked(&self) -> bool {
        self.locked
    }
}
