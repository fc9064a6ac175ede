use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError, Slide};

/// Terminal viewer for a looping awards carousel.
#[derive(Debug, Parser)]
#[command(name = "awardreel", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/awardreel/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show this many generated cards instead of the configured ones.
    #[arg(long, value_name = "N")]
    pub slides: Option<usize>,

    /// Write logs here instead of the configured log file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(count) = self.slides {
            config.slides = (0..count).map(Slide::placeholder).collect();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        Ok(config)
    }
}
