//! Contour builders shared by the integration tests
#![allow(dead_code)]

use arrow_orientation::geometry::{Contour, Point2D};

/// Build a contour from integer pixel coordinates
pub fn contour(points: &[(i32, i32)]) -> Contour {
    points.iter().copied().map(Point2D::from).collect()
}

/// Axis-aligned rectangle with its top-left corner at `(x, y)`
pub fn rectangle(x: i32, y: i32, width: i32, height: i32) -> Contour {
    contour(&[(x, y), (x + width, y), (x + width, y + height), (x, y + height)])
}

/// Circle sampled at `samples` evenly spaced angles
pub fn circle(center: Point2D, radius: f64, samples: usize) -> Contour {
    (0..samples)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / samples as f64;
            Point2D::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
        })
        .collect()
}

/// Triangle from the end-to-end scenario: base at y=50, apex at (100, 10)
pub fn reference_triangle() -> Contour {
    contour(&[(50, 50), (150, 50), (100, 10)])
}

/// Arrow pointing right, shaft from x=60, head tip at (260, 50)
pub fn right_arrow() -> Contour {
    contour(&[(60, 40), (120, 40), (120, 0), (260, 50), (120, 100), (120, 60), (60, 60)])
}

/// Arrow pointing up with its tip at `(50 + dx, 0)`
pub fn up_arrow(dx: i32) -> Contour {
    contour(&[
        (40 + dx, 200),
        (40 + dx, 140),
        (dx, 140),
        (50 + dx, 0),
        (100 + dx, 140),
        (60 + dx, 140),
        (60 + dx, 200),
    ])
}
