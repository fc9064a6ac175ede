use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// How long a navigation holds the transition lock. Must match the
/// presentation layer's slide transition.
pub const DEFAULT_SETTLE_DURATION_MS: u64 = 500;
/// Time between automatic advances.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4000;
/// Minimum horizontal drag distance that counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;
/// Card width plus gap; one slide step of the strip offset.
pub const DEFAULT_SLIDE_PITCH_PX: f32 = 370.0;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselTuning,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Award cards shown by the terminal host. The slide count is their number.
    #[serde(default = "default_slides")]
    pub slides: Vec<Slide>,
}

/// Carousel timing and geometry tunables.
///
/// Read once when a controller is constructed; later changes to a loaded
/// config do not reach a running controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselTuning {
    /// Transition lock hold time in milliseconds (default: 500).
    #[serde(default = "default_settle_duration_ms")]
    pub settle_duration_ms: u64,
    /// Time between automatic advances in milliseconds (default: 4000).
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
    /// Minimum drag distance to trigger navigation (default: 50).
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f32,
    /// Per-slide offset step (default: 370).
    #[serde(default = "default_slide_pitch_px")]
    pub slide_pitch_px: f32,
}

impl CarouselTuning {
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file. Defaults to `awardreel.log` in the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Resolve the log file location.
    pub fn log_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("awardreel")
                .join("awardreel.log"),
        }
    }
}

/// One award card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub description: String,
}

impl Slide {
    /// Generated card used when the host is asked for a fixed slide count.
    pub fn placeholder(position: usize) -> Self {
        Self {
            title: format!("Award #{}", position + 1),
            issuer: "Placeholder".to_string(),
            year: None,
            description: String::new(),
        }
    }
}

fn default_settle_duration_ms() -> u64 {
    DEFAULT_SETTLE_DURATION_MS
}

fn default_autoplay_interval_ms() -> u64 {
    DEFAULT_AUTOPLAY_INTERVAL_MS
}

fn default_swipe_threshold_px() -> f32 {
    DEFAULT_SWIPE_THRESHOLD_PX
}

fn default_slide_pitch_px() -> f32 {
    DEFAULT_SLIDE_PITCH_PX
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Best Paper Award".to_string(),
            issuer: "International Conference on Software Engineering".to_string(),
            year: Some(2023),
            description: "Recognised for work on incremental static analysis.".to_string(),
        },
        Slide {
            title: "Graduate Research Fellowship".to_string(),
            issuer: "National Science Foundation".to_string(),
            year: Some(2022),
            description: "Three-year fellowship for doctoral research.".to_string(),
        },
        Slide {
            title: "Dean's List".to_string(),
            issuer: "School of Engineering".to_string(),
            year: Some(2021),
            description: "Top five percent of the graduating class.".to_string(),
        },
        Slide {
            title: "Hackathon Winner".to_string(),
            issuer: "City Open Data Challenge".to_string(),
            year: Some(2020),
            description: "First place for a transit delay predictor.".to_string(),
        },
        Slide {
            title: "Outstanding Teaching Assistant".to_string(),
            issuer: "Department of Computer Science".to_string(),
            year: Some(2019),
            description: "Voted by students of the systems programming course.".to_string(),
        },
    ]
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            settle_duration_ms: DEFAULT_SETTLE_DURATION_MS,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            slide_pitch_px: DEFAULT_SLIDE_PITCH_PX,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            carousel: CarouselTuning::default(),
            logging: LoggingConfig::default(),
            slides: default_slides(),
        }
    }
}
