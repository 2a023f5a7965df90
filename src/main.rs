//! Arrow orientation detector reading from a webcam or video file.

use anyhow::Result;
use arrow_orientation::{app::ArrowApp, config::Config};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long, default_value = "0")]
    cam: i32,

    /// Video file to process instead of the camera
    #[arg(short, long)]
    video: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Number of frames averaged for the center and tip
    #[arg(short, long)]
    window: Option<usize>,

    /// Minimum contour area for an arrow candidate
    #[arg(long)]
    min_area: Option<f64>,

    /// Run without display windows
    #[arg(long)]
    headless: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_level));

    info!("Arrow Orientation Detector");

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::from_file(path).unwrap_or_else(|e| {
                warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            })
        }
        None => Config::default(),
    };

    // Command line flags take precedence over the file
    if args.video.is_some() {
        config.capture.video_file = args.video;
    } else if args.cam != 0 {
        config.capture.camera_index = args.cam;
    }
    if let Some(window) = args.window {
        config.analysis.smoothing_window = window;
    }
    if let Some(min_area) = args.min_area {
        config.analysis.min_contour_area = min_area;
    }
    if args.headless {
        config.capture.show_windows = false;
    }

    let mut app = ArrowApp::new(config)?;
    app.run()?;

    Ok(())
}
