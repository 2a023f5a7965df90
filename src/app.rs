//! Capture loop: read frames, analyze arrows, show annotated output.

use crate::{
    analyzer::{FrameAnalysis, FrameAnalyzer},
    config::Config,
    constants::{ARROWS_WINDOW, PROCESSED_WINDOW},
    error::{Error, Result},
    vision,
};
use log::{info, warn};
use opencv::{
    core::Mat,
    highgui::{self, WINDOW_AUTOSIZE},
    prelude::*,
    videoio::{self, VideoCapture},
};

/// Key codes that end the session
const KEY_QUIT: i32 = b'q' as i32;
const KEY_ESC: i32 = 27;

/// Annotated output of one frame
pub struct ProcessedFrame {
    /// Live frame with annotations
    pub frame: Mat,
    /// White canvas with the same annotations
    pub arrows: Mat,
    /// Analysis result
    pub analysis: FrameAnalysis,
}

/// Arrow detection application
pub struct ArrowApp {
    config: Config,
    analyzer: FrameAnalyzer,
    video_capture: VideoCapture,
}

impl ArrowApp {
    /// Open the configured video source and set up the analyzer
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the source cannot be opened
    pub fn new(config: Config) -> Result<Self> {
        info!("Initializing arrow orientation detector");
        config.validate()?;

        let video_capture = match &config.capture.video_file {
            Some(path) => {
                info!("Opening video file: {}", path.display());
                VideoCapture::from_file(&path.to_string_lossy(), videoio::CAP_ANY)?
            }
            None => {
                info!("Opening camera {}", config.capture.camera_index);
                VideoCapture::new(config.capture.camera_index, videoio::CAP_ANY)?
            }
        };

        if !video_capture.is_opened()? {
            return Err(Error::CaptureError("Could not open video source".to_string()));
        }

        let analyzer = FrameAnalyzer::from_config(&config)?;

        if config.capture.show_windows {
            highgui::named_window(PROCESSED_WINDOW, WINDOW_AUTOSIZE)?;
            highgui::named_window(ARROWS_WINDOW, WINDOW_AUTOSIZE)?;
        }

        Ok(Self {
            config,
            analyzer,
            video_capture,
        })
    }

    /// Run until the source is exhausted or the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if reading, processing or display fails
    pub fn run(&mut self) -> Result<()> {
        info!("Starting main loop");
        let mut frame_count: u64 = 0;

        loop {
            let mut frame = Mat::default();
            if !self.video_capture.read(&mut frame)? || frame.empty() {
                info!("No more frames after {frame_count} frames");
                break;
            }
            frame_count += 1;

            let processed = self.process_frame(frame)?;
            for observation in &processed.analysis.observations {
                info!(
                    "Arrow {} at {:.1}, {:.1}: {:.2} degrees",
                    observation.orientation,
                    observation.smoothed_center.x,
                    observation.smoothed_center.y,
                    observation.angle_degrees
                );
            }

            if self.config.capture.show_windows {
                highgui::imshow(PROCESSED_WINDOW, &processed.frame)?;
                highgui::imshow(ARROWS_WINDOW, &processed.arrows)?;

                let key = highgui::wait_key(1)?;
                if key == KEY_QUIT || key == KEY_ESC {
                    info!("Exit requested by user");
                    break;
                }
            }
        }

        if let Err(e) = self.video_capture.release() {
            warn!("Failed to release video source: {e}");
        }
        if self.config.capture.show_windows {
            highgui::destroy_all_windows()?;
        }

        info!("Application shutting down");
        Ok(())
    }

    /// Detect, analyze and annotate a single frame
    ///
    /// # Errors
    ///
    /// Returns an error if contour detection or rendering fails
    pub fn process_frame(&mut self, mut frame: Mat) -> Result<ProcessedFrame> {
        let contours = vision::detect_contours(&frame, &self.config.preprocessing)?;
        let analysis = self.analyzer.analyze(&contours, vision::frame_size(&frame));

        let mut arrows = vision::blank_canvas(&frame)?;
        vision::render(&mut frame, &analysis.instructions)?;
        vision::render(&mut arrows, &analysis.instructions)?;

        Ok(ProcessedFrame {
            frame,
            arrows,
            analysis,
        })
    }
}
