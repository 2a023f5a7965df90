//! Utility functions for coordinate conversions.

pub mod safe_cast;

use crate::{geometry::Point2D, Result};
use safe_cast::f64_to_i32;

/// Convert a point to integer pixel coordinates, truncating toward zero
///
/// # Errors
///
/// Returns an error if a coordinate is not finite or outside the i32 range
pub fn to_pixel(point: Point2D) -> Result<(i32, i32)> {
    Ok((f64_to_i32(point.x)?, f64_to_i32(point.y)?))
}
