//! Tests for the temporal smoother window semantics

use arrow_orientation::{geometry::Point2D, smoothing::TemporalSmoother};
use proptest::prelude::*;

fn mean(points: &[Point2D]) -> Point2D {
    let sum = points.iter().fold(Point2D::default(), |acc, p| acc + *p);
    sum / points.len() as f64
}

#[test]
fn test_constant_input_converges_exactly() {
    let mut smoother = TemporalSmoother::new(5);
    let value = Point2D::new(100.0, 36.0);
    for _ in 0..5 {
        assert_eq!(smoother.add(value), value);
    }
}

#[test]
fn test_output_follows_last_window() {
    let mut smoother = TemporalSmoother::new(2);
    smoother.add(Point2D::new(0.0, 0.0));
    smoother.add(Point2D::new(10.0, 10.0));
    let out = smoother.add(Point2D::new(20.0, -10.0));
    assert_eq!(out, Point2D::new(15.0, 0.0));
    assert_eq!(smoother.len(), 2);
    assert_eq!(smoother.window_size(), 2);
}

#[test]
#[should_panic(expected = "Window size must be greater than 0")]
fn test_zero_window() {
    let _ = TemporalSmoother::new(0);
}

proptest! {
    #[test]
    fn prop_output_is_mean_of_last_window(
        window in 1usize..10,
        points in prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 1..40)
    ) {
        let points: Vec<Point2D> = points.into_iter().map(Point2D::from).collect();
        let mut smoother = TemporalSmoother::new(window);

        for (i, point) in points.iter().enumerate() {
            let out = smoother.add(*point);
            let start = (i + 1).saturating_sub(window);
            let expected = mean(&points[start..=i]);

            prop_assert!((out.x - expected.x).abs() < 1e-6);
            prop_assert!((out.y - expected.y).abs() < 1e-6);
            prop_assert!(smoother.len() <= window);
            prop_assert_eq!(smoother.len(), (i + 1).min(window));
        }
    }
}
