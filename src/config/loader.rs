use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/awardreel/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("awardreel").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Slide pitch is a finite positive number
    /// - Swipe threshold is finite and not negative
    /// - Autoplay interval is non-zero
    /// - The settle duration is shorter than the autoplay interval
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tuning = &self.carousel;

        if !tuning.slide_pitch_px.is_finite() || tuning.slide_pitch_px <= 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "slide_pitch_px must be a positive number, got {}",
                    tuning.slide_pitch_px
                ),
            });
        }

        if !tuning.swipe_threshold_px.is_finite() || tuning.swipe_threshold_px < 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "swipe_threshold_px must not be negative, got {}",
                    tuning.swipe_threshold_px
                ),
            });
        }

        if tuning.autoplay_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "autoplay_interval_ms must be greater than zero".to_string(),
            });
        }

        // An autoplay tick landing inside every settle window would be dropped forever.
        if tuning.settle_duration_ms >= tuning.autoplay_interval_ms {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "settle_duration_ms ({}) must be shorter than autoplay_interval_ms ({})",
                    tuning.settle_duration_ms, tuning.autoplay_interval_ms
                ),
            });
        }

        Ok(())
    }
}
