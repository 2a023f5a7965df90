//! Temporal smoothing of point measurements.
//!
//! A [`TemporalSmoother`] keeps the most recent measurements of one point
//! stream (e.g. arrow centers) and reports their running average in place of
//! the noisy instantaneous value.

use crate::{geometry::Point2D, Error, Result};
use std::collections::VecDeque;

/// Moving average over a bounded window of points
#[derive(Debug, Clone)]
pub struct TemporalSmoother {
    window_size: usize,
    history: VecDeque<Point2D>,
}

impl TemporalSmoother {
    /// Create a new smoother
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is 0
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        assert!(window_size > 0, "Window size must be greater than 0");
        Self {
            window_size,
            history: VecDeque::new(),
        }
    }

    /// Create a new smoother, rejecting an empty window
    ///
    /// # Errors
    ///
    /// Returns an error if `window_size` is 0
    pub fn try_new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::FilterError("Window size must be greater than 0".to_string()));
        }
        Ok(Self::new(window_size))
    }

    /// Record a measurement and return the mean of the retained history
    pub fn add(&mut self, value: Point2D) -> Point2D {
        self.history.push_back(value);
        if self.history.len() > self.window_size {
            self.history.pop_front();
        }

        let mut sum = Point2D::default();
        for point in &self.history {
            sum += *point;
        }
        #[allow(clippy::cast_precision_loss)] // history length is bounded by the window size
        let count = self.history.len() as f64;
        sum / count
    }

    /// Maximum number of retained measurements
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of retained measurements
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether no measurement has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Retained measurements, oldest first
    pub fn history(&self) -> impl Iterator<Item = &Point2D> {
        self.history.iter()
    }
}
