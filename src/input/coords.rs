//! Coordinate conversion between client pixels and grid space.
//!
//! Grid space is (timeline position, row index). The scale is derived from
//! the view parameters on every call, so a zoom between two events is picked
//! up without any cache to invalidate.

use crate::types::{Item, Point, Rect};
use crate::view::ViewParams;

/// Maps pointer pixels to grid coordinates for one event.
///
/// `surface_origin` is the client position of the grid's top-left corner
/// (already shifted by the viewport's scroll offset).
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper<'a> {
    view: &'a ViewParams,
    surface_origin: Point,
}

impl<'a> CoordinateMapper<'a> {
    #[inline]
    pub fn new(view: &'a ViewParams, surface_origin: Point) -> Self {
        Self { view, surface_origin }
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.view.scale()
    }

    /// Client point to `(position, row_index)`
    #[inline]
    pub fn client_to_grid(&self, client: Point) -> (f64, i64) {
        (
            self.position_at(client.x - self.surface_origin.x),
            self.row_at(client.y - self.surface_origin.y),
        )
    }

    /// Horizontal pixel offset within the surface to a timeline position
    #[inline]
    pub fn position_at(&self, offset_x: f64) -> f64 {
        offset_x / self.scale()
    }

    /// Vertical pixel offset within the surface to a row index.
    ///
    /// Negative offsets give negative rows; callers clamp where needed.
    #[inline]
    pub fn row_at(&self, offset_y: f64) -> i64 {
        (offset_y / self.view.row_height).floor() as i64
    }

    /// Timeline position to a horizontal pixel offset within the surface
    #[inline]
    pub fn position_to_pixels(&self, position: f64) -> f64 {
        position * self.scale()
    }

    /// Top of a row as a vertical pixel offset within the surface
    #[inline]
    pub fn row_to_pixels(&self, row: i64) -> f64 {
        row as f64 * self.view.row_height
    }

    /// Rendered bounds of an item in client pixels
    pub fn item_bounds(&self, item: &Item) -> Rect {
        Rect::new(
            self.surface_origin.x + self.position_to_pixels(item.x),
            self.surface_origin.y + self.row_to_pixels(i64::from(item.row)),
            self.position_to_pixels(item.width),
            self.view.row_height,
        )
    }
}
