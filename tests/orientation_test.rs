//! Tests for orientation classification and the angle convention

use arrow_orientation::{
    geometry::Point2D,
    orientation::{classify, OrientationLabel},
};
use proptest::prelude::*;

const ORIGIN: Point2D = Point2D::new(0.0, 0.0);

#[test]
fn test_angle_sign_convention() {
    let right = classify(ORIGIN, Point2D::new(1.0, 0.0));
    assert_eq!(right.orientation, OrientationLabel::Right);
    assert_eq!(right.angle_degrees, 180.0);

    let below = classify(ORIGIN, Point2D::new(0.0, 1.0));
    assert_eq!(below.orientation, OrientationLabel::Down);
    assert_eq!(below.angle_degrees, -90.0);
}

#[test]
fn test_diagonal_label_and_angle_are_independent() {
    // 45 degree tie resolves vertically while the angle stays diagonal
    let result = classify(Point2D::new(10.0, 10.0), Point2D::new(20.0, 0.0));
    assert_eq!(result.orientation, OrientationLabel::Up);
    assert!((result.angle_degrees - 135.0).abs() < 1e-9);
}

#[test]
fn test_image_coordinates_y_down() {
    assert_eq!(classify(ORIGIN, Point2D::new(0.0, -5.0)).orientation, OrientationLabel::Up);
    assert_eq!(classify(ORIGIN, Point2D::new(0.0, 5.0)).orientation, OrientationLabel::Down);
}

proptest! {
    #[test]
    fn prop_classify_is_pure(
        cx in -1000.0f64..1000.0, cy in -1000.0f64..1000.0,
        tx in -1000.0f64..1000.0, ty in -1000.0f64..1000.0
    ) {
        let center = Point2D::new(cx, cy);
        let tip = Point2D::new(tx, ty);
        prop_assert_eq!(classify(center, tip), classify(center, tip));
    }

    #[test]
    fn prop_right_iff_horizontal_and_positive(
        cx in -1000i32..1000, cy in -1000i32..1000,
        tx in -1000i32..1000, ty in -1000i32..1000
    ) {
        let center = Point2D::from((cx, cy));
        let tip = Point2D::from((tx, ty));
        let is_right = classify(center, tip).orientation == OrientationLabel::Right;
        let expected = tip.x > center.x && (tip.x - center.x).abs() > (tip.y - center.y).abs();
        prop_assert_eq!(is_right, expected);
    }

    #[test]
    fn prop_angle_in_range(
        cx in -1000.0f64..1000.0, cy in -1000.0f64..1000.0,
        tx in -1000.0f64..1000.0, ty in -1000.0f64..1000.0
    ) {
        let angle = classify(Point2D::new(cx, cy), Point2D::new(tx, ty)).angle_degrees;
        prop_assert!(angle > -180.0 && angle <= 180.0);
    }
}
