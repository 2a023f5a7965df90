//! Arrow feature extraction: the shape's centroid and its pointed tip.

use crate::geometry::{Contour, Point2D};

/// Raw geometric features of one arrow contour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowFeatures {
    /// Boundary vertex farthest from the centroid
    pub tip: Point2D,
    /// Area centroid truncated to integer pixel coordinates
    pub center: Point2D,
}

/// Locate the centroid and tip of a contour.
///
/// Returns `None` for contours without enclosed area, for which no centroid
/// exists. The tip is the first vertex, in boundary order, whose distance to
/// the centroid is maximal.
#[must_use]
pub fn extract(contour: &Contour) -> Option<ArrowFeatures> {
    let center = contour.moments().centroid()?.truncated();

    let mut points = contour.points().iter().copied();
    let mut tip = points.next()?;
    let mut best = tip.distance_squared(center);
    for point in points {
        let d = point.distance_squared(center);
        if d > best {
            best = d;
            tip = point;
        }
    }

    Some(ArrowFeatures { tip, center })
}
