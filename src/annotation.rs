//! Renderer-agnostic drawing instructions produced for each detected arrow.

use crate::{config::AnnotationConfig, geometry::Point2D};

/// BGR color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
}

impl Color {
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const RED: Self = Self::new(0, 0, 255);
    pub const BLUE: Self = Self::new(255, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from blue, green and red channels
    #[must_use]
    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }
}

/// Dimensions of the canvas the instructions are drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: i32,
    pub height: i32,
}

impl FrameSize {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    /// Closed polyline along a contour
    Outline {
        points: Vec<Point2D>,
        color: Color,
        thickness: i32,
    },
    /// Filled disc
    Marker {
        center: Point2D,
        radius: i32,
        color: Color,
    },
    /// Text line with its baseline starting at `origin`
    Text {
        text: String,
        origin: (i32, i32),
        scale: f64,
        color: Color,
        thickness: i32,
    },
}

/// Vertical text cursor for the per-arrow info block.
///
/// Each arrow occupies two lines. The cursor returns to the top once it
/// passes the usable height of the frame.
#[derive(Debug, Clone)]
pub struct TextLayout {
    x: i32,
    start_y: i32,
    line_spacing: i32,
    wrap_at: i32,
    y: i32,
}

impl TextLayout {
    /// Create a layout for a frame of the given size
    #[must_use]
    pub fn new(config: &AnnotationConfig, frame: FrameSize) -> Self {
        Self {
            x: config.text_x,
            start_y: config.text_start_y,
            line_spacing: config.text_line_spacing,
            wrap_at: frame.height.saturating_sub(config.text_bottom_margin),
            y: config.text_start_y,
        }
    }

    /// Origins of the next two lines, advancing the cursor past them
    pub fn next_block(&mut self) -> [(i32, i32); 2] {
        let block = [(self.x, self.y), (self.x, self.y.saturating_add(self.line_spacing))];
        self.y = self.y.saturating_add(self.line_spacing.saturating_mul(2));
        if self.y > self.wrap_at {
            self.y = self.start_y;
        }
        block
    }
}
