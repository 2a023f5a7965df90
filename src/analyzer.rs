//! Per-frame arrow analysis.
//!
//! [`FrameAnalyzer`] turns the contours detected in one frame into
//! [`ArrowObservation`]s and the drawing instructions that visualise them.
//!
//! The analyzer tracks a single arrow: every qualifying contour of a frame is
//! fed through the same center and tip smoothers, so several arrows in view
//! share (and blend) one smoothing history.

use crate::{
    annotation::{Color, DrawInstruction, FrameSize, TextLayout},
    config::{AnnotationConfig, Config},
    features,
    geometry::{Contour, Point2D},
    orientation::{self, OrientationLabel},
    smoothing::TemporalSmoother,
    Error, Result,
};
use log::{debug, trace};

/// One detected arrow in the current frame
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowObservation {
    /// Source contour
    pub contour: Contour,
    /// Centroid of this frame's contour
    pub raw_center: Point2D,
    /// Tip of this frame's contour
    pub raw_tip: Point2D,
    /// Center averaged over the smoothing window
    pub smoothed_center: Point2D,
    /// Tip averaged over the smoothing window
    pub smoothed_tip: Point2D,
    /// Direction bucket of the smoothed pair
    pub orientation: OrientationLabel,
    /// Rotation angle of the smoothed pair
    pub angle_degrees: f64,
}

/// Per-frame contour accounting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Contours handed to the analyzer
    pub total: usize,
    /// Contours below the minimum area
    pub too_small: usize,
    /// Contours without a centroid
    pub degenerate: usize,
    /// Observations emitted
    pub detected: usize,
}

/// Everything produced for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameAnalysis {
    /// Detected arrows in contour order
    pub observations: Vec<ArrowObservation>,
    /// Drawing instructions for both output canvases
    pub instructions: Vec<DrawInstruction>,
    /// Contour accounting
    pub stats: FrameStats,
}

/// Tunables of the analyzer
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerSettings {
    /// Contours enclosing less area are ignored
    pub min_contour_area: f64,
    /// Annotation styling and text layout
    pub annotation: AnnotationConfig,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            min_contour_area: crate::constants::DEFAULT_MIN_CONTOUR_AREA,
            annotation: AnnotationConfig::default(),
        }
    }
}

/// Orchestrates extraction, smoothing and classification for each frame
#[derive(Debug)]
pub struct FrameAnalyzer {
    center_smoother: TemporalSmoother,
    tip_smoother: TemporalSmoother,
    settings: AnalyzerSettings,
}

impl FrameAnalyzer {
    /// Create an analyzer owning the given center and tip smoothers
    #[must_use]
    pub fn new(center_smoother: TemporalSmoother, tip_smoother: TemporalSmoother, settings: AnalyzerSettings) -> Self {
        Self {
            center_smoother,
            tip_smoother,
            settings,
        }
    }

    /// Build an analyzer from application configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the smoothing window is 0 or the area threshold is invalid
    pub fn from_config(config: &Config) -> Result<Self> {
        let min_contour_area = config.analysis.min_contour_area;
        if !min_contour_area.is_finite() || min_contour_area < 0.0 {
            return Err(Error::InvalidInput(format!(
                "Minimum contour area must be a non-negative number, got {min_contour_area}"
            )));
        }

        let window = config.analysis.smoothing_window;
        Ok(Self::new(
            TemporalSmoother::try_new(window)?,
            TemporalSmoother::try_new(window)?,
            AnalyzerSettings {
                min_contour_area,
                annotation: config.annotation.clone(),
            },
        ))
    }

    /// Analyzer settings
    #[must_use]
    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Smoother fed with arrow centers
    #[must_use]
    pub fn center_smoother(&self) -> &TemporalSmoother {
        &self.center_smoother
    }

    /// Smoother fed with arrow tips
    #[must_use]
    pub fn tip_smoother(&self) -> &TemporalSmoother {
        &self.tip_smoother
    }

    /// Analyze the contours of one frame
    pub fn analyze(&mut self, contours: &[Contour], frame: FrameSize) -> FrameAnalysis {
        let mut analysis = FrameAnalysis {
            stats: FrameStats {
                total: contours.len(),
                ..FrameStats::default()
            },
            ..FrameAnalysis::default()
        };
        let mut layout = TextLayout::new(&self.settings.annotation, frame);

        for (index, contour) in contours.iter().enumerate() {
            let area = contour.area();
            if area < self.settings.min_contour_area {
                trace!("Contour {index} ignored, area {area:.1} below threshold");
                analysis.stats.too_small += 1;
                continue;
            }

            let Some(raw) = features::extract(contour) else {
                debug!("Contour {index} has no centroid, skipping");
                analysis.stats.degenerate += 1;
                continue;
            };

            let smoothed_center = self.center_smoother.add(raw.center);
            let smoothed_tip = self.tip_smoother.add(raw.tip);
            let classification = orientation::classify(smoothed_center, smoothed_tip);

            let observation = ArrowObservation {
                contour: contour.clone(),
                raw_center: raw.center,
                raw_tip: raw.tip,
                smoothed_center,
                smoothed_tip,
                orientation: classification.orientation,
                angle_degrees: classification.angle_degrees,
            };

            self.annotate(&observation, &mut layout, &mut analysis.instructions);
            analysis.observations.push(observation);
        }

        analysis.stats.detected = analysis.observations.len();
        debug!(
            "Frame analyzed: {} contours, {} too small, {} degenerate, {} arrows",
            analysis.stats.total, analysis.stats.too_small, analysis.stats.degenerate, analysis.stats.detected
        );

        analysis
    }

    /// Emit outline, markers and the two info lines for an observation
    fn annotate(&self, observation: &ArrowObservation, layout: &mut TextLayout, out: &mut Vec<DrawInstruction>) {
        let style = &self.settings.annotation;

        out.push(DrawInstruction::Outline {
            points: observation.contour.points().to_vec(),
            color: Color::GREEN,
            thickness: style.outline_thickness,
        });
        out.push(DrawInstruction::Marker {
            center: observation.smoothed_center,
            radius: style.marker_radius,
            color: Color::RED,
        });
        out.push(DrawInstruction::Marker {
            center: observation.smoothed_tip,
            radius: style.marker_radius,
            color: Color::BLUE,
        });

        let [angle_origin, orientation_origin] = layout.next_block();
        let lines = [
            (format!("Angle: {:.2} degrees", observation.angle_degrees), angle_origin),
            (format!("Orientation: {}", observation.orientation), orientation_origin),
        ];
        for (text, origin) in lines {
            out.push(DrawInstruction::Text {
                text,
                origin,
                scale: style.font_scale,
                color: Color::WHITE,
                thickness: style.text_thickness,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Contour {
        vec![
            Point2D::new(x, y),
            Point2D::new(x + w, y),
            Point2D::new(x + w, y + h),
            Point2D::new(x, y + h),
        ]
        .into()
    }

    fn analyzer(window: usize) -> FrameAnalyzer {
        FrameAnalyzer::new(
            TemporalSmoother::new(window),
            TemporalSmoother::new(window),
            AnalyzerSettings::default(),
        )
    }

    #[test]
    fn test_instructions_per_observation() {
        let mut analyzer = analyzer(5);
        let analysis = analyzer.analyze(&[rectangle(0.0, 0.0, 50.0, 40.0)], FrameSize::new(640, 480));

        assert_eq!(analysis.observations.len(), 1);
        assert_eq!(analysis.instructions.len(), 5);
        assert!(matches!(analysis.instructions[0], DrawInstruction::Outline { .. }));
        assert!(matches!(
            analysis.instructions[1],
            DrawInstruction::Marker { color: Color::RED, .. }
        ));
        assert!(matches!(
            analysis.instructions[2],
            DrawInstruction::Marker { color: Color::BLUE, .. }
        ));
        match &analysis.instructions[4] {
            DrawInstruction::Text { text, origin, .. } => {
                assert!(text.starts_with("Orientation: "));
                assert_eq!(*origin, (10, 60));
            }
            other => panic!("Expected text instruction, got {other:?}"),
        }
    }

    #[test]
    fn test_small_contours_counted() {
        let mut analyzer = analyzer(5);
        let analysis = analyzer.analyze(
            &[rectangle(0.0, 0.0, 10.0, 10.0), rectangle(0.0, 0.0, 50.0, 40.0)],
            FrameSize::new(640, 480),
        );
        assert_eq!(
            analysis.stats,
            FrameStats {
                total: 2,
                too_small: 1,
                degenerate: 0,
                detected: 1
            }
        );
        assert_eq!(analyzer.center_smoother().len(), 1);
    }

    #[test]
    fn test_degenerate_contour_skipped_without_threshold() {
        let mut analyzer = FrameAnalyzer::new(
            TemporalSmoother::new(3),
            TemporalSmoother::new(3),
            AnalyzerSettings {
                min_contour_area: 0.0,
                ..AnalyzerSettings::default()
            },
        );
        let line: Contour = vec![Point2D::new(0.0, 0.0), Point2D::new(5.0, 5.0)].into();
        let analysis = analyzer.analyze(&[line], FrameSize::new(640, 480));
        assert!(analysis.observations.is_empty());
        assert!(analysis.instructions.is_empty());
        assert_eq!(analysis.stats.degenerate, 1);
        assert!(analyzer.tip_smoother().is_empty());
    }

    #[test]
    fn test_from_config_rejects_zero_window() {
        let mut config = Config::default();
        config.analysis.smoothing_window = 0;
        assert!(FrameAnalyzer::from_config(&config).is_err());
    }
}
