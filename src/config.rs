//! Configuration management for the arrow orientation detector

use crate::constants::{
    DEFAULT_BLUR_KERNEL, DEFAULT_CANNY_HIGH, DEFAULT_CANNY_LOW, DEFAULT_FONT_SCALE, DEFAULT_MARKER_RADIUS,
    DEFAULT_MIN_CONTOUR_AREA, DEFAULT_OUTLINE_THICKNESS, DEFAULT_SMOOTHING_WINDOW, DEFAULT_TEXT_BOTTOM_MARGIN,
    DEFAULT_TEXT_LINE_SPACING, DEFAULT_TEXT_START_Y, DEFAULT_TEXT_THICKNESS, DEFAULT_TEXT_X,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-frame analysis parameters
    pub analysis: AnalysisConfig,

    /// Edge and contour detection parameters
    pub preprocessing: PreprocessingConfig,

    /// Annotation styling and text layout
    pub annotation: AnnotationConfig,

    /// Video source and display
    pub capture: CaptureConfig,
}

/// Analysis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Contours enclosing less area are ignored
    pub min_contour_area: f64,

    /// Number of frames averaged by the center and tip smoothers
    pub smoothing_window: usize,
}

/// Preprocessing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessingConfig {
    /// Gaussian blur kernel size (odd)
    pub blur_kernel: i32,

    /// Canny lower hysteresis threshold
    pub canny_low: f64,

    /// Canny upper hysteresis threshold
    pub canny_high: f64,
}

/// Annotation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Left edge of the info text
    pub text_x: i32,

    /// Baseline of the first info line
    pub text_start_y: i32,

    /// Distance between consecutive info lines
    pub text_line_spacing: i32,

    /// Text wraps to the top once it gets this close to the bottom edge
    pub text_bottom_margin: i32,

    /// Radius of the center and tip markers
    pub marker_radius: i32,

    /// Font scale for info text
    pub font_scale: f64,

    /// Stroke thickness for info text
    pub text_thickness: i32,

    /// Stroke thickness for contour outlines
    pub outline_thickness: i32,
}

/// Capture configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Camera index
    pub camera_index: i32,

    /// Video file to read instead of the camera
    pub video_file: Option<PathBuf>,

    /// Show the processed and arrows-only windows
    pub show_windows: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_contour_area: DEFAULT_MIN_CONTOUR_AREA,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
        }
    }
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        Self {
            blur_kernel: DEFAULT_BLUR_KERNEL,
            canny_low: DEFAULT_CANNY_LOW,
            canny_high: DEFAULT_CANNY_HIGH,
        }
    }
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            text_x: DEFAULT_TEXT_X,
            text_start_y: DEFAULT_TEXT_START_Y,
            text_line_spacing: DEFAULT_TEXT_LINE_SPACING,
            text_bottom_margin: DEFAULT_TEXT_BOTTOM_MARGIN,
            marker_radius: DEFAULT_MARKER_RADIUS,
            font_scale: DEFAULT_FONT_SCALE,
            text_thickness: DEFAULT_TEXT_THICKNESS,
            outline_thickness: DEFAULT_OUTLINE_THICKNESS,
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            camera_index: 0,
            video_file: None,
            show_windows: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first invalid setting
    pub fn validate(&self) -> Result<()> {
        // Analysis
        if self.analysis.smoothing_window == 0 {
            return Err(Error::ConfigError(
                "Smoothing window size must be greater than 0".to_string(),
            ));
        }
        if !self.analysis.min_contour_area.is_finite() || self.analysis.min_contour_area < 0.0 {
            return Err(Error::ConfigError(
                "Minimum contour area must be a non-negative number".to_string(),
            ));
        }

        // Preprocessing
        if self.preprocessing.blur_kernel <= 0 || self.preprocessing.blur_kernel % 2 == 0 {
            return Err(Error::ConfigError(
                "Blur kernel size must be odd and greater than 0".to_string(),
            ));
        }
        if self.preprocessing.canny_low < 0.0 || self.preprocessing.canny_low > self.preprocessing.canny_high {
            return Err(Error::ConfigError(
                "Canny thresholds must satisfy 0 <= low <= high".to_string(),
            ));
        }

        // Annotation
        if self.annotation.text_line_spacing <= 0 {
            return Err(Error::ConfigError("Text line spacing must be positive".to_string()));
        }
        if self.annotation.marker_radius <= 0 {
            return Err(Error::ConfigError("Marker radius must be positive".to_string()));
        }
        if self.annotation.font_scale <= 0.0 {
            return Err(Error::ConfigError("Font scale must be positive".to_string()));
        }

        // Capture
        if let Some(video) = &self.capture.video_file {
            if !video.exists() {
                return Err(Error::ConfigError(format!(
                    "Video file not found: {}",
                    video.display()
                )));
            }
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Arrow Orientation Detector Configuration

# Per-frame analysis
analysis:
  min_contour_area: 1000.0
  smoothing_window: 5

# Edge and contour detection
preprocessing:
  blur_kernel: 5
  canny_low: 50.0
  canny_high: 150.0

# Annotation styling and text layout
annotation:
  text_x: 10
  text_start_y: 30
  text_line_spacing: 30
  text_bottom_margin: 50
  marker_radius: 5
  font_scale: 0.5
  text_thickness: 2
  outline_thickness: 2

# Video source
capture:
  camera_index: 0
  show_windows: true
"#;
