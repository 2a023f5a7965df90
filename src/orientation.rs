//! Orientation classification and rotation angle of an arrow.

use crate::geometry::Point2D;
use std::fmt;

/// Cardinal direction an arrow points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrientationLabel {
    /// Tip above the center
    Up,
    /// Tip below the center
    Down,
    /// Tip left of the center
    Left,
    /// Tip right of the center
    Right,
}

impl OrientationLabel {
    /// Upper-case label as shown on screen
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl fmt::Display for OrientationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one center/tip pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Four-way direction bucket
    pub orientation: OrientationLabel,
    /// Rotation angle in degrees, in (-180, 180]
    pub angle_degrees: f64,
}

/// Cardinal bucket of the `tip - center` vector in image coordinates.
///
/// Equal horizontal and vertical offsets resolve to `Up`/`Down`.
#[must_use]
pub fn orientation(center: Point2D, tip: Point2D) -> OrientationLabel {
    let d = tip - center;
    if d.x.abs() > d.y.abs() {
        if d.x > 0.0 {
            OrientationLabel::Right
        } else {
            OrientationLabel::Left
        }
    } else if d.y < 0.0 {
        OrientationLabel::Up
    } else {
        OrientationLabel::Down
    }
}

/// Angle in degrees of the `center - tip` vector.
///
/// A tip directly right of the center yields 180, a tip directly below it -90.
/// The value is deliberately not negated: `-atan2` would turn these into
/// -180 and 90, which the regression tests reject.
#[must_use]
pub fn angle_degrees(center: Point2D, tip: Point2D) -> f64 {
    let d = center - tip;
    let angle = d.y.atan2(d.x).to_degrees();
    // atan2(-0.0, x < 0) lands on -180
    if angle <= -180.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Classify direction and angle of an arrow from its center and tip
#[must_use]
pub fn classify(center: Point2D, tip: Point2D) -> Classification {
    Classification {
        orientation: orientation(center, tip),
        angle_degrees: angle_degrees(center, tip),
    }
}
