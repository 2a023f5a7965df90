//! Constants used throughout the application

/// Contours enclosing less than this area are treated as edge noise
pub const DEFAULT_MIN_CONTOUR_AREA: f64 = 1000.0;

/// Default history length for the center and tip smoothers
pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;

/// Preprocessing defaults (Gaussian blur kernel and Canny hysteresis thresholds)
pub const DEFAULT_BLUR_KERNEL: i32 = 5;
pub const DEFAULT_CANNY_LOW: f64 = 50.0;
pub const DEFAULT_CANNY_HIGH: f64 = 150.0;

/// Text block layout
pub const DEFAULT_TEXT_X: i32 = 10;
pub const DEFAULT_TEXT_START_Y: i32 = 30;
pub const DEFAULT_TEXT_LINE_SPACING: i32 = 30;
pub const DEFAULT_TEXT_BOTTOM_MARGIN: i32 = 50;

/// Annotation styling
pub const DEFAULT_MARKER_RADIUS: i32 = 5;
pub const DEFAULT_FONT_SCALE: f64 = 0.5;
pub const DEFAULT_TEXT_THICKNESS: i32 = 2;
pub const DEFAULT_OUTLINE_THICKNESS: i32 = 2;

/// Window titles
pub const PROCESSED_WINDOW: &str = "Processed Frame";
pub const ARROWS_WINDOW: &str = "White Background with Arrows";

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
