use std::fs;

use awardreel::config::{
    CarouselTuning, Config, ConfigError, DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_SETTLE_DURATION_MS,
    DEFAULT_SLIDE_PITCH_PX, DEFAULT_SWIPE_THRESHOLD_PX,
};
use tempfile::TempDir;

/// Test that Config::default() carries the reference tunables.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.carousel.settle_duration_ms, DEFAULT_SETTLE_DURATION_MS);
    assert_eq!(config.carousel.autoplay_interval_ms, 4000);
    assert_eq!(config.carousel.swipe_threshold_px, 50.0);
    assert_eq!(config.carousel.slide_pitch_px, 370.0);
    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.file.is_none());
    assert!(!config.slides.is_empty());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("awardreel/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"[carousel]
autoplay_interval_ms = 6000

[[slides]]
title = "Best Paper"
issuer = "ICSE"
year = 2023

[[slides]]
title = "Fellowship"
"#,
    )
    .expect("write config");

    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.carousel.autoplay_interval_ms, 6000);
    assert_eq!(config.carousel.settle_duration_ms, DEFAULT_SETTLE_DURATION_MS);
    assert_eq!(config.carousel.swipe_threshold_px, DEFAULT_SWIPE_THRESHOLD_PX);
    assert_eq!(config.carousel.slide_pitch_px, DEFAULT_SLIDE_PITCH_PX);
    assert_eq!(config.slides.len(), 2);
    assert_eq!(config.slides[0].year, Some(2023));
    assert_eq!(config.slides[1].issuer, "");
}

#[test]
fn test_empty_slide_list_is_allowed() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "slides = []\n").expect("write config");

    let config = Config::load_from(&path).expect("valid config");
    assert!(config.slides.is_empty());
}

#[test]
fn test_parse_error_reports_path() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[carousel\nsettle_duration_ms = ").expect("write config");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_invalid_values_fail_validation() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[carousel]\nslide_pitch_px = -10.0\n").expect("write config");

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("slide_pitch_px"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_tuning_durations() {
    let tuning = CarouselTuning {
        settle_duration_ms: 300,
        autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
        ..CarouselTuning::default()
    };
    assert_eq!(tuning.settle_duration().as_millis(), 300);
    assert_eq!(tuning.autoplay_interval().as_millis(), 4000);
}
