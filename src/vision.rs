//! OpenCV adapters: contour detection from frames and rendering of drawing instructions.

use crate::{
    annotation::{Color, DrawInstruction, FrameSize},
    config::PreprocessingConfig,
    geometry::{Contour, Point2D},
    utils::to_pixel,
    Result,
};
use opencv::{
    core::{Mat, Point, Scalar, Size, Vector, BORDER_DEFAULT},
    imgproc::{self, CHAIN_APPROX_SIMPLE, COLOR_BGR2GRAY, FONT_HERSHEY_SIMPLEX, LINE_8, RETR_EXTERNAL},
    prelude::*,
};

/// Detect external shape contours in a BGR frame.
///
/// Grayscale, Gaussian blur, Canny edges, then outermost contours with
/// simple chain approximation.
///
/// # Errors
///
/// Returns an error if any `OpenCV` operation fails
pub fn detect_contours(frame: &Mat, config: &PreprocessingConfig) -> Result<Vec<Contour>> {
    let mut gray = Mat::default();
    imgproc::cvt_color(frame, &mut gray, COLOR_BGR2GRAY, 0)?;

    let mut blurred = Mat::default();
    imgproc::gaussian_blur(
        &gray,
        &mut blurred,
        Size::new(config.blur_kernel, config.blur_kernel),
        0.0,
        0.0,
        BORDER_DEFAULT,
    )?;

    let mut edges = Mat::default();
    imgproc::canny(&blurred, &mut edges, config.canny_low, config.canny_high, 3, false)?;

    let mut raw: Vector<Vector<Point>> = Vector::new();
    imgproc::find_contours(&edges, &mut raw, RETR_EXTERNAL, CHAIN_APPROX_SIMPLE, Point::new(0, 0))?;

    Ok(raw
        .iter()
        .map(|contour| contour.iter().map(|p| Point2D::from((p.x, p.y))).collect())
        .collect())
}

/// Frame dimensions of a `Mat`
#[must_use]
pub fn frame_size(frame: &Mat) -> FrameSize {
    FrameSize::new(frame.cols(), frame.rows())
}

/// White canvas with the same size and type as `frame`
///
/// # Errors
///
/// Returns an error if the allocation fails
pub fn blank_canvas(frame: &Mat) -> Result<Mat> {
    Ok(Mat::new_rows_cols_with_default(
        frame.rows(),
        frame.cols(),
        frame.typ(),
        Scalar::all(255.0),
    )?)
}

fn scalar(color: Color) -> Scalar {
    Scalar::new(f64::from(color.b), f64::from(color.g), f64::from(color.r), 0.0)
}

fn pixel(point: Point2D) -> Result<Point> {
    let (x, y) = to_pixel(point)?;
    Ok(Point::new(x, y))
}

/// Apply drawing instructions to a canvas
///
/// # Errors
///
/// Returns an error if a coordinate cannot be represented or drawing fails
pub fn render(canvas: &mut Mat, instructions: &[DrawInstruction]) -> Result<()> {
    for instruction in instructions {
        match instruction {
            DrawInstruction::Outline {
                points,
                color,
                thickness,
            } => {
                let polygon = points.iter().map(|p| pixel(*p)).collect::<Result<Vector<Point>>>()?;
                imgproc::polylines(canvas, &polygon, true, scalar(*color), *thickness, LINE_8, 0)?;
            }
            DrawInstruction::Marker { center, radius, color } => {
                imgproc::circle(canvas, pixel(*center)?, *radius, scalar(*color), -1, LINE_8, 0)?;
            }
            DrawInstruction::Text {
                text,
                origin,
                scale,
                color,
                thickness,
            } => {
                imgproc::put_text(
                    canvas,
                    text,
                    Point::new(origin.0, origin.1),
                    FONT_HERSHEY_SIMPLEX,
                    *scale,
                    scalar(*color),
                    *thickness,
                    LINE_8,
                    false,
                )?;
            }
        }
    }
    Ok(())
}
