//! Arrow detection and orientation library for live video.
//!
//! Given the shape contours found in a frame, this library locates each
//! arrow's centroid and tip, smooths both over a short history of frames,
//! classifies the arrow into one of four cardinal directions and computes its
//! rotation angle. It also produces renderer-agnostic drawing instructions
//! for annotating the frame.
//!
//! The pipeline for each qualifying contour:
//! 1. Area filter (contours below the threshold are edge noise)
//! 2. Centroid from spatial moments, tip as the farthest boundary vertex
//! 3. Moving-average smoothing of center and tip
//! 4. Orientation bucket and angle from the smoothed pair
//!
//! With the `opencv` feature enabled, the [`vision`] module extracts contours
//! from camera frames and renders the instructions, and [`app`] runs the
//! capture loop.
//!
//! # Examples
//!
//! ```
//! use arrow_orientation::{
//!     analyzer::{AnalyzerSettings, FrameAnalyzer},
//!     annotation::FrameSize,
//!     geometry::{Contour, Point2D},
//!     orientation::OrientationLabel,
//!     smoothing::TemporalSmoother,
//! };
//!
//! let mut analyzer = FrameAnalyzer::new(
//!     TemporalSmoother::new(5),
//!     TemporalSmoother::new(5),
//!     AnalyzerSettings::default(),
//! );
//!
//! // Arrow pointing right
//! let arrow: Contour = [(60, 40), (120, 40), (120, 0), (260, 50), (120, 100), (120, 60), (60, 60)]
//!     .into_iter()
//!     .map(Point2D::from)
//!     .collect();
//!
//! let analysis = analyzer.analyze(&[arrow], FrameSize::new(640, 480));
//! assert_eq!(analysis.observations.len(), 1);
//! assert_eq!(analysis.observations[0].orientation, OrientationLabel::Right);
//! ```

/// Points, contours and spatial moments
pub mod geometry;

/// Moving-average smoothing of point streams
pub mod smoothing;

/// Centroid and tip extraction from contours
pub mod features;

/// Direction classification and rotation angle
pub mod orientation;

/// Drawing instructions and text layout
pub mod annotation;

/// Per-frame orchestration
pub mod analyzer;

/// Coordinate conversion helpers
pub mod utils;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

/// `OpenCV` contour detection and rendering
#[cfg(feature = "opencv")]
pub mod vision;

/// Main application module
#[cfg(feature = "opencv")]
pub mod app;

pub use error::{Error, Result};
