//! Grid snapping.

/// Round `value` to the nearest multiple of `unit`.
///
/// Identity when no unit is given or the unit is not positive. Halfway
/// values round away from zero (`f64::round`).
#[inline]
pub fn snap(value: f64, unit: Option<f64>) -> f64 {
    match unit {
        Some(unit) if unit > 0.0 => (value / unit).round() * unit,
        _ => value,
    }
}
