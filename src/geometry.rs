//! Geometric primitives: pixel-space points, contours and their spatial moments.

use crate::constants::EPSILON;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// A point in image coordinates (x to the right, y downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point2D {
    /// Create a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point
    #[must_use]
    pub fn distance_squared(&self, other: Self) -> f64 {
        let d = *self - other;
        d.x * d.x + d.y * d.y
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance(&self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Drop the fractional part of both coordinates (rounds toward zero)
    #[must_use]
    pub fn truncated(&self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc())
    }
}

impl Add for Point2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2D {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point2D {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

/// Zeroth and first order spatial moments of a closed polygon
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Moments {
    /// Enclosed area (always non-negative)
    pub m00: f64,
    /// First order moment along x
    pub m10: f64,
    /// First order moment along y
    pub m01: f64,
}

impl Moments {
    /// Area centroid, or `None` when the polygon encloses no area
    #[must_use]
    pub fn centroid(&self) -> Option<Point2D> {
        if self.m00 == 0.0 {
            return None;
        }
        Some(Point2D::new(self.m10 / self.m00, self.m01 / self.m00))
    }
}

/// Closed polygon boundary of a detected shape
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    points: Vec<Point2D>,
}

impl Contour {
    /// Create a contour from its boundary points in traversal order
    #[must_use]
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// Boundary points in traversal order
    #[must_use]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Number of boundary points
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the contour has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over closing edges `(p[i], p[i + 1])`, wrapping to the first point
    fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Enclosed area regardless of traversal direction (shoelace formula)
    #[must_use]
    pub fn area(&self) -> f64 {
        let twice: f64 = self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum();
        twice.abs() / 2.0
    }

    /// Spatial moments via Green's theorem.
    ///
    /// The first order moments carry the sign of the traversal direction so that
    /// `m10 / m00` and `m01 / m00` give the area centroid for clockwise and
    /// counter-clockwise contours alike. Polygons with (near) zero area yield
    /// all-zero moments.
    #[must_use]
    pub fn moments(&self) -> Moments {
        let mut a00 = 0.0;
        let mut a10 = 0.0;
        let mut a01 = 0.0;

        for (p, q) in self.edges() {
            let cross = p.x * q.y - q.x * p.y;
            a00 += cross;
            a10 += cross * (p.x + q.x);
            a01 += cross * (p.y + q.y);
        }

        if a00.abs() <= EPSILON {
            return Moments::default();
        }

        let sign = a00.signum();
        Moments {
            m00: a00.abs() / 2.0,
            m10: sign * a10 / 6.0,
            m01: sign * a01 / 6.0,
        }
    }
}

impl From<Vec<Point2D>> for Contour {
    fn from(points: Vec<Point2D>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point2D> for Contour {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
