mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    CarouselTuning, Config, LoggingConfig, Slide, DEFAULT_AUTOPLAY_INTERVAL_MS,
    DEFAULT_SETTLE_DURATION_MS, DEFAULT_SLIDE_PITCH_PX, DEFAULT_SWIPE_THRESHOLD_PX,
};
