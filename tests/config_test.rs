//! Tests for configuration loading, saving and validation

use arrow_orientation::{
    analyzer::FrameAnalyzer,
    config::{Config, EXAMPLE_CONFIG},
    Error,
};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("arrow_orientation_{}_{name}", std::process::id()))
}

#[test]
fn test_config_file_roundtrip() {
    let path = temp_path("roundtrip.yaml");
    let mut config = Config::default();
    config.analysis.smoothing_window = 8;
    config.annotation.font_scale = 0.75;
    config.capture.show_windows = false;

    config.to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
}

#[test]
fn test_example_config_builds_analyzer() {
    let config = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
    config.validate().unwrap();
    let analyzer = FrameAnalyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.tip_smoother().window_size(), 5);
    assert_eq!(analyzer.settings().min_contour_area, 1000.0);
}

#[test]
fn test_missing_file() {
    let result = Config::from_file(temp_path("does_not_exist.yaml"));
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_missing_video_file_rejected() {
    let mut config = Config::default();
    config.capture.video_file = Some(temp_path("missing.mp4"));
    match config.validate() {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Video file not found")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_validation_messages() {
    let cases: [(fn(&mut Config), &str); 7] = [
        (|c| c.analysis.smoothing_window = 0, "Smoothing window"),
        (|c| c.analysis.min_contour_area = -1.0, "Minimum contour area"),
        (|c| c.preprocessing.blur_kernel = 0, "Blur kernel"),
        (|c| c.preprocessing.canny_high = 10.0, "Canny thresholds"),
        (|c| c.annotation.text_line_spacing = 0, "line spacing"),
        (|c| c.annotation.marker_radius = -2, "Marker radius"),
        (|c| c.annotation.font_scale = 0.0, "Font scale"),
    ];

    for (mutate, expected) in cases {
        let mut config = Config::default();
        mutate(&mut config);
        match config.validate() {
            Err(Error::ConfigError(msg)) => assert!(msg.contains(expected), "{msg} should mention {expected}"),
            other => panic!("Expected ConfigError for {expected}, got {other:?}"),
        }
    }
}
