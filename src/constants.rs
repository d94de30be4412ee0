//! Engine-wide constants.
//!
//! Centralizes the thresholds and limits used by the interaction engine so
//! the gesture handlers and the item store agree on them.

// ============================================================================
// Click & Drag Thresholds
// ============================================================================

/// Maximum position distance (timeline units) between down and up for a tap
pub const CLICK_POSITION_TOLERANCE: f64 = 5.0;

/// Position distance (timeline units) a drag must exceed to count as moved
pub const DRAG_MOVE_THRESHOLD: f64 = 5.0;

/// Default edge hit area for resize, in rendered pixels
pub const DEFAULT_RESIZE_THRESHOLD_PX: f64 = 12.0;

// ============================================================================
// Item Defaults
// ============================================================================

/// Default minimum item width in timeline units
pub const DEFAULT_MIN_ITEM_WIDTH: f64 = 50.0;

/// Default maximum item width in timeline units
pub const DEFAULT_MAX_ITEM_WIDTH: f64 = 1000.0;

/// Item type assigned when the caller does not name one
pub const DEFAULT_ITEM_TYPE: &str = "default";

// ============================================================================
// View Defaults
// ============================================================================

/// Initial row height in pixels
pub const DEFAULT_ROW_HEIGHT: f64 = 40.0;

/// Initial column width in pixels
pub const DEFAULT_COLUMN_WIDTH: f64 = 300.0;

// ============================================================================
// Zoom
// ============================================================================

/// Minimum row height reachable by zooming
pub const MIN_ROW_HEIGHT: f64 = 44.0;

/// Maximum row height reachable by zooming
pub const MAX_ROW_HEIGHT: f64 = 100.0;

/// Minimum column width reachable by zooming
pub const MIN_COLUMN_WIDTH: f64 = 50.0;

/// Maximum column width reachable by zooming
pub const MAX_COLUMN_WIDTH: f64 = 400.0;

/// Wheel zoom sensitivity (per mille of normalized delta)
pub const WHEEL_SENSITIVITY: f64 = 10.0;

/// Pixels per wheel line when the delta is reported in lines
pub const WHEEL_LINE_PIXELS: f64 = 16.0;

/// Pixels per wheel page when the delta is reported in pages
pub const WHEEL_PAGE_PIXELS: f64 = 600.0;

/// Pinch distances below this (pixels) cannot produce a stable ratio
pub const MIN_PINCH_DISTANCE: f64 = 1.0;
