//! Engine configuration.
//!
//! Both structs deserialize from camelCase JSON with every field optional,
//! so a host can ship a partial config and inherit the defaults.

use crate::constants::{
    DEFAULT_MAX_ITEM_WIDTH, DEFAULT_MIN_ITEM_WIDTH, DEFAULT_RESIZE_THRESHOLD_PX, MAX_COLUMN_WIDTH,
    MAX_ROW_HEIGHT, MIN_COLUMN_WIDTH, MIN_ROW_HEIGHT, WHEEL_SENSITIVITY,
};
use crate::error::{TimelineError, TimelineResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Options consumed by the drag and resize engines and the item store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Granularity `x` and `width` snap to during edits
    pub snap_unit: Option<f64>,
    pub min_item_width: f64,
    pub max_item_width: f64,
    pub drag_enabled: bool,
    pub resize_enabled: bool,
    /// Edge hit area for resize, in rendered pixels
    pub resize_threshold_px: f64,
    pub zoom: ZoomLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            snap_unit: None,
            min_item_width: DEFAULT_MIN_ITEM_WIDTH,
            max_item_width: DEFAULT_MAX_ITEM_WIDTH,
            drag_enabled: true,
            resize_enabled: true,
            resize_threshold_px: DEFAULT_RESIZE_THRESHOLD_PX,
            zoom: ZoomLimits::default(),
        }
    }
}

/// Ranges the zoom engine clamps view parameters to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomLimits {
    pub min_row_height: f64,
    pub max_row_height: f64,
    pub min_column_width: f64,
    pub max_column_width: f64,
    pub wheel_sensitivity: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_row_height: MIN_ROW_HEIGHT,
            max_row_height: MAX_ROW_HEIGHT,
            min_column_width: MIN_COLUMN_WIDTH,
            max_column_width: MAX_COLUMN_WIDTH,
            wheel_sensitivity: WHEEL_SENSITIVITY,
        }
    }
}

impl ZoomLimits {
    #[inline]
    pub fn clamp_row_height(&self, value: f64) -> f64 {
        value.clamp(self.min_row_height, self.max_row_height)
    }

    #[inline]
    pub fn clamp_column_width(&self, value: f64) -> f64 {
        value.clamp(self.min_column_width, self.max_column_width)
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> TimelineResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "Loaded engine config");
        Ok(config)
    }

    /// Check that the values can be used together.
    ///
    /// `f64::clamp` panics on inverted or NaN bounds, so every range the
    /// engine clamps against is checked here.
    pub fn validate(&self) -> TimelineResult<()> {
        if let Some(unit) = self.snap_unit {
            if !(unit.is_finite() && unit > 0.0) {
                return Err(format!("snapUnit must be positive, got {unit}").into());
            }
        }
        check_range("itemWidth", self.min_item_width, self.max_item_width)?;
        if self.min_item_width <= 0.0 {
            return Err(format!("minItemWidth must be positive, got {}", self.min_item_width).into());
        }
        if !(self.resize_threshold_px.is_finite() && self.resize_threshold_px >= 0.0) {
            return Err(TimelineError::InvalidConfig(format!(
                "resizeThresholdPx must be non-negative, got {}",
                self.resize_threshold_px
            )));
        }
        check_range("rowHeight", self.zoom.min_row_height, self.zoom.max_row_height)?;
        check_range("columnWidth", self.zoom.min_column_width, self.zoom.max_column_width)?;
        if !self.zoom.wheel_sensitivity.is_finite() {
            return Err("wheelSensitivity must be finite".to_string().into());
        }
        Ok(())
    }

    /// Snap unit if one is configured and usable
    #[inline]
    pub fn active_snap_unit(&self) -> Option<f64> {
        self.snap_unit.filter(|unit| *unit > 0.0)
    }

    /// Clamp a width to `[min_item_width, max_item_width]`
    #[inline]
    pub fn clamp_width(&self, width: f64) -> f64 {
        width.clamp(self.min_item_width, self.max_item_width)
    }
}

fn check_range(name: &str, min: f64, max: f64) -> TimelineResult<()> {
    if !(min.is_finite() && max.is_finite()) {
        return Err(format!("{name} bounds must be finite").into());
    }
    if min > max {
        return Err(format!("{name} min {min} exceeds max {max}").into());
    }
    Ok(())
}
